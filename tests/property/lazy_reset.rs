//! Reset-on-failure and failure-identity properties of the lazy source.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{Cursor, Read};
use std::rc::Rc;

use proptest::prelude::*;

use entry_sources::{
    Caller, EntryInfo, EntrySource, LazySource, RandomRead, Severity, SourceError,
};

/// Failure kinds a scripted operation can raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FailKind {
    NotFound,
    Busy,
    Corrupt,
    Invariant,
}

impl FailKind {
    fn to_error(self) -> SourceError {
        match self {
            FailKind::NotFound => SourceError::not_found("e"),
            FailKind::Busy => SourceError::busy("e"),
            FailKind::Corrupt => SourceError::corrupt("scripted corruption"),
            FailKind::Invariant => SourceError::invariant("scripted invariant"),
        }
    }

    fn matches(self, err: &SourceError) -> bool {
        match self {
            FailKind::NotFound => matches!(err, SourceError::NotFound { .. }),
            FailKind::Busy => matches!(err, SourceError::Busy { .. }),
            FailKind::Corrupt => matches!(err, SourceError::Corrupt { .. }),
            FailKind::Invariant => matches!(err, SourceError::Invariant { .. }),
        }
    }

    fn severity(self) -> Severity {
        match self {
            FailKind::Invariant => Severity::Fatal,
            _ => Severity::Recoverable,
        }
    }
}

/// One scripted operation: which socket operation to invoke, and whether
/// the delegate should fail it.
#[derive(Clone, Copy, Debug)]
struct Step {
    op: u8,
    fail: Option<FailKind>,
}

/// Delegate whose per-operation outcomes come from a shared script.
///
/// The script is shared across re-derivations so the schedule keeps
/// advancing when the lazy source builds a fresh delegate.
struct ScriptedDelegate {
    entry: EntryInfo,
    script: Rc<RefCell<VecDeque<Option<FailKind>>>>,
}

impl ScriptedDelegate {
    fn step(&mut self) -> Result<(), SourceError> {
        let next = self.script.borrow_mut().pop_front().flatten();
        match next {
            Some(kind) => Err(kind.to_error()),
            None => Ok(()),
        }
    }
}

impl EntrySource for ScriptedDelegate {
    type Entry = EntryInfo;

    fn local_target(&mut self, _caller: Caller) -> Result<EntryInfo, SourceError> {
        self.step()?;
        Ok(self.entry.clone())
    }

    fn open_random_access(
        &mut self,
        _caller: Caller,
    ) -> Result<Box<dyn RandomRead>, SourceError> {
        self.step()?;
        Ok(Box::new(Cursor::new(b"x".to_vec())))
    }

    fn open_stream(&mut self, _caller: Caller) -> Result<Box<dyn Read>, SourceError> {
        self.step()?;
        Ok(Box::new(Cursor::new(b"x".to_vec())))
    }
}

fn step_strategy() -> impl Strategy<Value = Step> {
    let kind = prop::sample::select(vec![
        FailKind::NotFound,
        FailKind::Busy,
        FailKind::Corrupt,
        FailKind::Invariant,
    ]);
    (0u8..3, prop::option::weighted(0.4, kind)).prop_map(|(op, fail)| Step { op, fail })
}

proptest! {
    /// For any operation/failure schedule: a failed call leaves the cache
    /// empty, the next call re-derives, successful runs never re-derive,
    /// and every observed failure keeps the variant and severity the
    /// delegate raised.
    #[test]
    fn reset_and_identity_over_arbitrary_schedules(
        steps in prop::collection::vec(step_strategy(), 1..32),
    ) {
        let script: Rc<RefCell<VecDeque<Option<FailKind>>>> =
            Rc::new(RefCell::new(steps.iter().map(|s| s.fail).collect()));

        let derivations = Rc::new(RefCell::new(0usize));
        let script_in = Rc::clone(&script);
        let derivations_in = Rc::clone(&derivations);
        let mut lazy = LazySource::new(move || {
            *derivations_in.borrow_mut() += 1;
            Ok::<_, SourceError>(ScriptedDelegate {
                entry: EntryInfo::new("e"),
                script: Rc::clone(&script_in),
            })
        });

        let mut expected_derivations = 0usize;
        let mut bound = false;
        for step in &steps {
            if !bound {
                expected_derivations += 1;
            }
            let outcome = match step.op {
                0 => lazy.local_target(Caller::direct()).map(|_| ()),
                1 => lazy.open_random_access(Caller::direct()).map(|_| ()),
                _ => lazy.open_stream(Caller::direct()).map(|_| ()),
            };
            match step.fail {
                Some(kind) => {
                    let err = outcome.unwrap_err();
                    prop_assert!(kind.matches(&err));
                    prop_assert_eq!(err.severity(), kind.severity());
                    bound = false;
                }
                None => {
                    prop_assert!(outcome.is_ok());
                    bound = true;
                }
            }
            prop_assert_eq!(lazy.is_bound(), bound);
            prop_assert_eq!(*derivations.borrow(), expected_derivations);
        }
    }
}
