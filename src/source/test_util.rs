//! Scripted source for exercising forwarding and reset behavior in tests.

use std::collections::VecDeque;
use std::io::{Cursor, Read};

use crate::entry::EntryInfo;
use crate::source::caller::Caller;
use crate::source::error::SourceError;
use crate::source::read::RandomRead;
use crate::source::EntrySource;

/// Test source with a scripted failure queue and caller recording.
///
/// Each operation first records the caller context it observed, then pops
/// the failure queue: a queued error fails that one operation, an empty
/// queue succeeds. Payload reads serve independent cursors.
pub(crate) struct ScriptedSource {
    entry: EntryInfo,
    payload: Vec<u8>,
    failures: VecDeque<SourceError>,
    callers: Vec<Caller>,
}

impl ScriptedSource {
    pub fn new(entry: EntryInfo, payload: Vec<u8>) -> Self {
        Self {
            entry,
            payload,
            failures: VecDeque::new(),
            callers: Vec::new(),
        }
    }

    /// Queues a failure for the next operation.
    pub fn fail_next(&mut self, err: SourceError) {
        self.failures.push_back(err);
    }

    /// Caller context observed by the most recent operation.
    pub fn last_caller(&self) -> Option<Caller> {
        self.callers.last().copied()
    }

    fn step(&mut self, caller: Caller) -> Result<(), SourceError> {
        self.callers.push(caller);
        match self.failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl EntrySource for ScriptedSource {
    type Entry = EntryInfo;

    fn local_target(&mut self, caller: Caller) -> Result<EntryInfo, SourceError> {
        self.step(caller)?;
        Ok(self.entry.clone())
    }

    fn open_random_access(
        &mut self,
        caller: Caller,
    ) -> Result<Box<dyn RandomRead>, SourceError> {
        self.step(caller)?;
        Ok(Box::new(Cursor::new(self.payload.clone())))
    }

    fn open_stream(&mut self, caller: Caller) -> Result<Box<dyn Read>, SourceError> {
        self.step(caller)?;
        Ok(Box::new(Cursor::new(self.payload.clone())))
    }
}
