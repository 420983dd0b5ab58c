//! Deferred tasks on a virtual clock.
//!
//! The game has exactly one suspension point: the monster waits a short
//! delay before it strikes back. Instead of a wall-clock timer, the delay is
//! a task in a [`Scheduler`] whose clock only moves when the caller advances
//! it. Front ends advance it by real elapsed time; tests advance it by hand.
//!
//! Every scheduled task gets a [`TaskHandle`] that can cancel it, so an
//! abandoned game never receives a stale callback.
//!
//! ## Example Usage
//!
//! ```
//! use monster_slayer::schedule::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! let strike = scheduler.schedule(100, "strike");
//! let _later = scheduler.schedule(250, "later");
//!
//! assert!(scheduler.advance(99).is_empty());
//!
//! let fired = scheduler.advance(1);
//! assert_eq!(fired, vec![(strike, "strike")]);
//!
//! assert_eq!(scheduler.next_due(), Some(250));
//! ```

mod scheduler;

pub use scheduler::{Scheduler, TaskHandle};
