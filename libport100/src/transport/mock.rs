// libport100/src/transport/mock.rs
//! Scripted in-memory transport for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::transport::traits::Transport;
use crate::types::DeviceType;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    written: Vec<Vec<u8>>,
    replies: VecDeque<Result<Vec<u8>>>,
    read_timeouts: Vec<u64>,
    close_calls: usize,
    closed: bool,
    device_type: DeviceType,
}

/// Mock transport for unit tests. It records written frames and returns
/// queued replies; an empty queue behaves like a read timeout.
///
/// Clones share state, so a test can keep a handle for inspection after
/// handing the transport to a `Device`.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    /// Empty mock reporting `device_type`.
    pub fn new(device_type: DeviceType) -> Self {
        let state = MockState {
            device_type,
            ..MockState::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Queue raw bytes for the next read.
    pub fn push_response(&self, resp: Vec<u8>) {
        self.state.borrow_mut().replies.push_back(Ok(resp));
    }

    /// Queue an explicit read timeout.
    pub fn push_timeout(&self) {
        self.state.borrow_mut().replies.push_back(Err(Error::Timeout));
    }

    /// Queue an arbitrary read failure.
    pub fn push_error(&self, err: Error) {
        self.state.borrow_mut().replies.push_back(Err(err));
    }

    /// Every frame written so far, oldest first.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.state.borrow().written.clone()
    }

    /// Timeouts passed to each `read` call, oldest first.
    pub fn read_timeouts(&self) -> Vec<u64> {
        self.state.borrow().read_timeouts.clone()
    }

    /// Replies still queued.
    pub fn pending_replies(&self) -> usize {
        self.state.borrow().replies.len()
    }

    /// Number of `close` calls so far.
    pub fn close_calls(&self) -> usize {
        self.state.borrow().close_calls
    }

    /// True once `close` was called.
    pub fn is_closed(&self) -> bool {
        self.state.borrow().closed
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.closed {
            return Err(Error::Closed);
        }
        state.written.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        let mut state = self.state.borrow_mut();
        if state.closed {
            return Err(Error::Closed);
        }
        state.read_timeouts.push(timeout_ms);
        state.replies.pop_front().unwrap_or(Err(Error::Timeout))
    }

    fn device_type(&self) -> Result<DeviceType> {
        Ok(self.state.borrow().device_type)
    }

    fn close(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.close_calls += 1;
        state.closed = true;
        Ok(())
    }
}
