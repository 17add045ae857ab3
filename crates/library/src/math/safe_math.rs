use anchor_lang::prelude::*;
use std::panic::Location;

// Copyright 2021 Drift Labs
// Copyright 2025 INSTADAPP LABS INC
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

// Portions of this code are derived from Drift Protocol
// Original source: https://github.com/drift-labs/protocol-v2/blob/master/programs/drift/src/math/safe_math.rs

use crate::errors::{ErrorCodes, LibraryResult};
use crate::math::ceil_div::CheckedCeilDiv;

/// Checked arithmetic that logs the caller location and fails with
/// `LibraryMathError` instead of panicking or wrapping.
pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self) -> LibraryResult<Self>;
    fn safe_sub(self, rhs: Self) -> LibraryResult<Self>;
    fn safe_mul(self, rhs: Self) -> LibraryResult<Self>;
    fn safe_div(self, rhs: Self) -> LibraryResult<Self>;
    fn safe_div_ceil(self, rhs: Self) -> LibraryResult<Self>;
}

#[track_caller]
#[inline(always)]
fn or_math_error<T>(value: Option<T>) -> LibraryResult<T> {
    let caller = Location::caller();
    value.ok_or_else(|| {
        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
        ErrorCodes::LibraryMathError
    })
}

macro_rules! checked_impl {
    ($($t:ty),*) => {
        $(
            impl SafeMath for $t {
                #[track_caller]
                #[inline(always)]
                fn safe_add(self, v: $t) -> LibraryResult<$t> {
                    or_math_error(self.checked_add(v))
                }

                #[track_caller]
                #[inline(always)]
                fn safe_sub(self, v: $t) -> LibraryResult<$t> {
                    or_math_error(self.checked_sub(v))
                }

                #[track_caller]
                #[inline(always)]
                fn safe_mul(self, v: $t) -> LibraryResult<$t> {
                    or_math_error(self.checked_mul(v))
                }

                #[track_caller]
                #[inline(always)]
                fn safe_div(self, v: $t) -> LibraryResult<$t> {
                    or_math_error(self.checked_div(v))
                }

                #[track_caller]
                #[inline(always)]
                fn safe_div_ceil(self, v: $t) -> LibraryResult<$t> {
                    or_math_error(self.checked_ceil_div(v))
                }
            }
        )*
    };
}

checked_impl!(u128, u64, u32, u16, u8, i128, i64);
