//! `PointId` and `FaceId`: strong, zero-cost handles into an external mesh
//!
//! Both handles wrap a plain `u64`. They are opaque: the mesh owner decides
//! what a valid id is, and the neighbor queries never check ranges. Unlike
//! a sentinel-based numbering, `0` is an ordinary id here.
//!
//! This module provides:
//! - Transparent newtypes so a `&[PointId]` has the layout of a `&[u64]`.
//! - Implementations of common traits (`Debug`, `Display`, ordering,
//!   hashing, serde) so the handles can be used in maps, sets and printed.

use std::fmt;

/// Handle of a mesh point (vertex).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct PointId(u64);

/// Handle of a mesh face (polygon).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct FaceId(u64);

macro_rules! impl_handle {
    ($name:ident) => {
        impl $name {
            /// Wraps a raw id.
            #[inline]
            pub const fn new(raw: u64) -> Self {
                $name(raw)
            }

            /// Returns the raw id.
            #[inline]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(raw: u64) -> Self {
                $name(raw)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(raw: usize) -> Self {
                $name(raw as u64)
            }
        }

        /// Displays as `Name(raw_value)`.
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        /// Prints only the raw integer.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_handle!(PointId);
impl_handle!(FaceId);
