//! Pointer-like shapes: `Option<T>` and `Box<T>`.

use super::Populate;
use crate::{FillResult, Filler, Shape};

/// `None` is replaced by `Some(T::default())` before recursing, unless
/// [`Filler::may_materialize`] refuses it.
impl<T> Populate for Option<T>
where
    T: Populate + Default + 'static,
{
    fn shape(&self) -> Shape {
        Shape::Pointer
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        if self.is_none() && filler.may_materialize::<T>() {
            let inner = self.insert(T::default());
            return filler.visit_materialized::<T, _>(|nested| nested.visit(inner));
        }
        self.as_mut().map_or(Ok(()), |inner| filler.visit(inner))
    }
}

impl<T> Populate for Box<T>
where
    T: Populate + ?Sized,
{
    fn shape(&self) -> Shape {
        Shape::Pointer
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        filler.visit(&mut **self)
    }
}
