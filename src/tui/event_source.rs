//! 输入事件来源：真实终端 (crossterm) 或脚本化的测试替身

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::core::event::InputEvent;

pub trait EventSource {
    /// 等待最多 `timeout`；超时返回 Ok(None)
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>>;
}

#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>> {
        if !crossterm::event::poll(timeout)? {
            return Ok(None);
        }
        Ok(Some(InputEvent::from(crossterm::event::read()?)))
    }
}

/// 按顺序回放预设事件；耗尽后返回 UnexpectedEof，调用方据此结束等待
#[derive(Debug, Default)]
pub struct ScriptedEventSource {
    events: VecDeque<InputEvent>,
}

impl ScriptedEventSource {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEventSource {
    fn next_event(&mut self, _timeout: Duration) -> io::Result<Option<InputEvent>> {
        match self.events.pop_front() {
            Some(event) => Ok(Some(event)),
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted events exhausted",
            )),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/event_source.rs"]
mod tests;
