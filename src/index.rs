// Copyright 2016 Joe Wilm, The Alacritty Project Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Line and Column newtypes for strongly typed grid APIs.
//!
//! Both are signed so that callers can express a negative position, which the grid then
//! rejects as out of bounds instead of it wrapping around.

use std::cmp::{Ord, Ordering};
use std::convert::TryFrom;
use std::fmt;
use std::num::TryFromIntError;
use std::ops::{Add, AddAssign, Deref, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

/// Index in the grid using line, column notation.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<L = Line, C = Column> {
    pub line: L,
    pub column: C,
}

impl<L, C> Point<L, C> {
    pub fn new(line: L, column: C) -> Point<L, C> {
        Point { line, column }
    }
}

impl Point {
    /// Move the point by `count` steps of `step`.
    ///
    /// Returns `None` if either coordinate overflows.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_offset(self, step: Point<isize, isize>, count: isize) -> Option<Self> {
        let line = step.line.checked_mul(count)?.checked_add(self.line.0)?;
        let column = step.column.checked_mul(count)?.checked_add(self.column.0)?;
        Some(Point::new(Line(line), Column(column)))
    }
}

impl<L: Ord, C: Ord> PartialOrd for Point<L, C> {
    fn partial_cmp(&self, other: &Point<L, C>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<L: Ord, C: Ord> Ord for Point<L, C> {
    fn cmp(&self, other: &Point<L, C>) -> Ordering {
        match (self.line.cmp(&other.line), self.column.cmp(&other.column)) {
            (Ordering::Equal, ord) | (ord, _) => ord,
        }
    }
}

impl<L: fmt::Display, C: fmt::Display> fmt::Display for Point<L, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

impl From<(isize, isize)> for Point {
    fn from((line, column): (isize, isize)) -> Self {
        Point::new(Line(line), Column(column))
    }
}

/// A line.
///
/// Newtype to avoid passing values incorrectly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line(pub isize);

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A column.
///
/// Newtype to avoid passing values incorrectly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column(pub isize);

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

assert_eq_size!(Line, isize);
assert_eq_size!(Column, isize);

macro_rules! ops {
    ($ty:ty, $construct:expr) => {
        impl Deref for $ty {
            type Target = isize;

            #[inline]
            fn deref(&self) -> &isize {
                &self.0
            }
        }

        impl From<isize> for $ty {
            #[inline]
            fn from(val: isize) -> $ty {
                $construct(val)
            }
        }

        impl TryFrom<usize> for $ty {
            type Error = TryFromIntError;

            #[inline]
            fn try_from(val: usize) -> Result<$ty, TryFromIntError> {
                isize::try_from(val).map($construct)
            }
        }

        impl Add<$ty> for $ty {
            type Output = $ty;

            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $construct(self.0 + rhs.0)
            }
        }

        impl Add<isize> for $ty {
            type Output = $ty;

            #[inline]
            fn add(self, rhs: isize) -> $ty {
                $construct(self.0 + rhs)
            }
        }

        impl AddAssign<isize> for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: isize) {
                self.0 += rhs
            }
        }

        impl Sub<$ty> for $ty {
            type Output = $ty;

            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $construct(self.0 - rhs.0)
            }
        }

        impl Sub<isize> for $ty {
            type Output = $ty;

            #[inline]
            fn sub(self, rhs: isize) -> $ty {
                $construct(self.0 - rhs)
            }
        }

        impl SubAssign<isize> for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: isize) {
                self.0 -= rhs
            }
        }

        impl PartialEq<isize> for $ty {
            #[inline]
            fn eq(&self, other: &isize) -> bool {
                self.0.eq(other)
            }
        }

        impl PartialOrd<isize> for $ty {
            #[inline]
            fn partial_cmp(&self, other: &isize) -> Option<Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl PartialEq<usize> for $ty {
            #[inline]
            fn eq(&self, other: &usize) -> bool {
                self.0 >= 0 && (self.0 as usize).eq(other)
            }
        }

        impl PartialOrd<usize> for $ty {
            /// Negative indices order before every `usize`.
            #[inline]
            fn partial_cmp(&self, other: &usize) -> Option<Ordering> {
                if self.0 < 0 {
                    Some(Ordering::Less)
                } else {
                    (self.0 as usize).partial_cmp(other)
                }
            }
        }
    };
}

ops!(Line, Line);
ops!(Column, Column);

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::{Column, Line, Point};

    #[test]
    fn location_ordering() {
        assert!(Point::new(Line(0), Column(0)) == Point::new(Line(0), Column(0)));
        assert!(Point::new(Line(1), Column(0)) > Point::new(Line(0), Column(0)));
        assert!(Point::new(Line(0), Column(1)) > Point::new(Line(0), Column(0)));
        assert!(Point::new(Line(1), Column(1)) > Point::new(Line(0), Column(0)));
        assert!(Point::new(Line(1), Column(1)) > Point::new(Line(0), Column(1)));
        assert!(Point::new(Line(1), Column(1)) > Point::new(Line(1), Column(0)));
    }

    #[test]
    fn negative_index_orders_before_usize() {
        assert!(Line(-1) < 0usize);
        assert!(Column(-5) < 0usize);
        assert!(Line(3) < 4usize);
        assert!(Column(4) >= 4usize);
        assert!(Line(-1) != 0usize);
        assert!(Column(2) == 2usize);
    }

    #[test]
    fn offset_by_step() {
        let point = Point::new(Line(1), Column(2));

        assert_eq!(point.checked_offset(Point::new(2, 4), 0), Some(point));
        assert_eq!(point.checked_offset(Point::new(2, 4), 3), Some(Point::new(Line(7), Column(14))));
        assert_eq!(point.checked_offset(Point::new(-1, 1), 2), Some(Point::new(Line(-1), Column(4))));
        assert_eq!(point.checked_offset(Point::new(isize::MAX, 0), 1), None);
    }

    #[test]
    fn point_from_tuple() {
        assert_eq!(Point::from((3, -2)), Point::new(Line(3), Column(-2)));
    }

    #[test]
    fn from_usize_rejects_overflow() {
        assert_eq!(Line::try_from(3usize), Ok(Line(3)));
        assert_eq!(Column::try_from(isize::MAX as usize), Ok(Column(isize::MAX)));
        assert!(Line::try_from(isize::MAX as usize + 1).is_err());
        assert!(Column::try_from(usize::MAX).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let point = Point::new(Line(-1), Column(4));

        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"line":-1,"column":4}"#);

        let parsed: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, point);
    }

    #[test]
    fn display() {
        assert_eq!(Line(-3).to_string(), "-3");
        assert_eq!(Point::new(Line(1), Column(7)).to_string(), "(1, 7)");
    }
}
