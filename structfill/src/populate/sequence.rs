//! Fixed and variable size sequences.
//!
//! Empty variable-size sequences receive exactly one default element so the
//! nested fill logic has something to work on; non-empty ones keep their
//! length and every element is populated in index order.

use std::collections::VecDeque;

use super::Populate;
use crate::{FillResult, Filler, Shape};

fn populate_elements<'a, T, I>(filler: &mut Filler<'_>, elements: I) -> FillResult<()>
where
    T: Populate + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    elements
        .into_iter()
        .enumerate()
        .try_for_each(|(index, element)| filler.element(index, element))
}

impl<T, const N: usize> Populate for [T; N]
where
    T: Populate,
{
    fn shape(&self) -> Shape {
        Shape::Array
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        populate_elements(filler, self.iter_mut())
    }
}

impl<T> Populate for Vec<T>
where
    T: Populate + Default + 'static,
{
    fn shape(&self) -> Shape {
        Shape::Sequence
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        if self.is_empty() && filler.may_materialize::<T>() {
            self.push(T::default());
            return filler.visit_materialized::<T, _>(|nested| {
                populate_elements(nested, self.iter_mut())
            });
        }
        populate_elements(filler, self.iter_mut())
    }
}

impl<T> Populate for VecDeque<T>
where
    T: Populate + Default + 'static,
{
    fn shape(&self) -> Shape {
        Shape::Sequence
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        if self.is_empty() && filler.may_materialize::<T>() {
            self.push_back(T::default());
            return filler.visit_materialized::<T, _>(|nested| {
                populate_elements(nested, self.iter_mut())
            });
        }
        populate_elements(filler, self.iter_mut())
    }
}

macro_rules! tuples {
    ($( ($($name:ident $index:tt),+) )+) => {
        $(
            impl<$($name),+> Populate for ($($name,)+)
            where
                $($name: Populate,)+
            {
                fn shape(&self) -> Shape {
                    Shape::Array
                }

                fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
                    $( filler.element($index, &mut self.$index)?; )+
                    Ok(())
                }
            }
        )+
    };
}

tuples! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
}
