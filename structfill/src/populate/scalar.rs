//! Scalar leaves: overwritten with the configured default for their kind.

use super::{MapKey, Populate};
use crate::{Complex, FillResult, Filler, Shape};

macro_rules! integer_scalars {
    ($getter:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Populate for $ty {
                fn shape(&self) -> Shape {
                    Shape::Scalar
                }

                fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
                    *self = filler.narrow(filler.settings().$getter())?;
                    Ok(())
                }
            }

            impl MapKey for $ty {
                fn representative_key(filler: &Filler<'_>) -> FillResult<Self> {
                    filler.narrow(filler.settings().$getter())
                }
            }
        )+
    };
}

integer_scalars!(int => i8, i16, i32, i64, i128, isize);
integer_scalars!(uint => u8, u16, u32, u64, u128, usize);

impl Populate for f64 {
    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        *self = filler.settings().float();
        Ok(())
    }
}

impl Populate for f32 {
    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "f32 locations take the f64 default rounded to the nearest f32"
    )]
    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        *self = filler.settings().float() as Self;
        Ok(())
    }
}

impl Populate for String {
    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        filler.settings().string().clone_into(self);
        Ok(())
    }
}

impl MapKey for String {
    fn representative_key(filler: &Filler<'_>) -> FillResult<Self> {
        Ok(filler.settings().string().to_owned())
    }
}

impl Populate for bool {
    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        *self = filler.settings().boolean();
        Ok(())
    }
}

impl MapKey for bool {
    fn representative_key(filler: &Filler<'_>) -> FillResult<Self> {
        Ok(filler.settings().boolean())
    }
}

impl Populate for Complex {
    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        *self = filler.settings().complex();
        Ok(())
    }
}
