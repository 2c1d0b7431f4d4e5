use core::fmt;

/// Enumeration of the axes of three-dimensional space.
///
/// Can be used to infallibly index 3-component arrays and vectors.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All three axes in the standard order, [X, Y, Z].
    ///
    /// This is also the order in which [`Cuboid::difference()`](crate::math::Cuboid::difference)
    /// peels pieces off.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Convert the axis to a number for indexing 3-element arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis whose lowercase name is `name`, as written in reboot steps.
    ///
    /// ```
    /// # extern crate reactor_base as reactor;
    /// use reactor::math::Axis;
    ///
    /// assert_eq!(Axis::from_name("y"), Some(Axis::Y));
    /// assert_eq!(Axis::from_name("Y"), None);
    /// ```
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }
}

/// Format the axis as one of the strings "x", "y", or "z" (lowercase).
impl fmt::LowerHex for Axis {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}
/// Format the axis as one of the strings "X", "Y", or "Z" (uppercase).
impl fmt::UpperHex for Axis {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        })
    }
}

impl From<Axis> for usize {
    #[inline]
    fn from(value: Axis) -> Self {
        value as usize
    }
}

mod impl_index_axis {
    use super::Axis;
    use core::ops;

    impl<T> ops::Index<Axis> for [T; 3] {
        type Output = T;

        #[inline]
        fn index(&self, index: Axis) -> &Self::Output {
            &self[index as usize]
        }
    }
    impl<T> ops::IndexMut<Axis> for [T; 3] {
        #[inline]
        fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
            &mut self[index as usize]
        }
    }

    macro_rules! impl_xyz_e {
        ($x:ident $y:ident $z:ident, $($type:tt)*) => {
            impl<T, U> ops::Index<Axis> for $($type)*<T, U> {
                type Output = T;

                #[inline]
                fn index(&self, index: Axis) -> &Self::Output {
                    match index {
                        Axis::X => &self.$x,
                        Axis::Y => &self.$y,
                        Axis::Z => &self.$z,
                    }
                }
            }
            impl<T, U> ops::IndexMut<Axis> for $($type)*<T, U> {
                #[inline]
                fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
                    match index {
                        Axis::X => &mut self.$x,
                        Axis::Y => &mut self.$y,
                        Axis::Z => &mut self.$z,
                    }
                }
            }
        };
    }
    impl_xyz_e!(x y z, euclid::Point3D);
    impl_xyz_e!(width height depth, euclid::Size3D);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use exhaust::Exhaust as _;

    #[test]
    fn axis_conversion() {
        for axis in Axis::ALL {
            assert_eq!(usize::from(axis), axis.index());
        }
    }

    #[test]
    fn all_is_exhaustive() {
        assert_eq!(Axis::exhaust().collect::<Vec<_>>(), Axis::ALL.to_vec());
    }

    #[test]
    fn axis_fmt() {
        use Axis::*;
        assert_eq!(
            format!("{X:x} {Y:x} {Z:x} {X:X} {Y:X} {Z:X}"),
            "x y z X Y Z"
        );
    }

    #[test]
    fn index_euclid_types() {
        let mut point = euclid::Point3D::<i32, ()>::new(1, 2, 3);
        let mut size = euclid::Size3D::<u64, ()>::new(4, 5, 6);
        assert_eq!(Axis::ALL.map(|axis| point[axis]), [1, 2, 3]);
        assert_eq!(Axis::ALL.map(|axis| size[axis]), [4, 5, 6]);

        point[Axis::Y] = 20;
        size[Axis::Z] = 60;
        assert_eq!(point, euclid::Point3D::new(1, 20, 3));
        assert_eq!(size, euclid::Size3D::new(4, 5, 60));
    }

    #[test]
    fn name_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_name(&format!("{axis:x}")), Some(axis));
        }
        assert_eq!(Axis::from_name("w"), None);
        assert_eq!(Axis::from_name(""), None);
    }
}
