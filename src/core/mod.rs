//! Standard trait impls and conversions for [`MinMaxHeap`].

use crate::heap::{Entry, MinMaxHeap};

mod clone;
mod default;
mod into;
