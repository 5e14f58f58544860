//! Types the engine cannot fill.
//!
//! These are left untouched, or abort the call when the fail-on-unrecognized
//! flag is set. Fields of any other type can opt into the same policy with
//! `#[populate(opaque)]`.

use std::cell::{Cell, RefCell};
use std::ffi::OsString;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant, SystemTime};

use super::Populate;
use crate::{FillResult, Filler, Shape};

macro_rules! unrecognized {
    ($( [$($generics:tt)*] $ty:ty ),+ $(,)?) => {
        $(
            impl<$($generics)*> Populate for $ty {
                fn shape(&self) -> Shape {
                    Shape::Unrecognized
                }

                fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
                    filler.unrecognized::<Self>()
                }
            }
        )+
    };
}

unrecognized!(
    [] char,
    [] (),
    [] Duration,
    [] Instant,
    [] SystemTime,
    [] PathBuf,
    [] OsString,
    [T: ?Sized] PhantomData<T>,
    [T: ?Sized] Rc<T>,
    [T: ?Sized] Arc<T>,
    [T] Cell<T>,
    [T: ?Sized] RefCell<T>,
    [T] Sender<T>,
    [T] Receiver<T>,
);
