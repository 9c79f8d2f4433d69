/// Minimum and maximum bounds in three dimensions, as declared by the file header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// The minimum x, y, and z values.
    pub min: [f64; 3],

    /// The maximum x, y, and z values.
    pub max: [f64; 3],
}

impl Bounds {
    /// Flattens the bounds into the renderer's layout: `[min_x, min_y, min_z, max_x, max_y, max_z]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_ingest::Bounds;
    /// let bounds = Bounds { min: [1., 2., 3.], max: [4., 5., 6.] };
    /// assert_eq!([1., 2., 3., 4., 5., 6.], bounds.to_f32_array());
    /// ```
    pub fn to_f32_array(&self) -> [f32; 6] {
        [
            self.min[0] as f32,
            self.min[1] as f32,
            self.min[2] as f32,
            self.max[0] as f32,
            self.max[1] as f32,
            self.max[2] as f32,
        ]
    }
}

impl From<las::Bounds> for Bounds {
    fn from(bounds: las::Bounds) -> Bounds {
        Bounds {
            min: [bounds.min.x, bounds.min.y, bounds.min.z],
            max: [bounds.max.x, bounds.max.y, bounds.max.z],
        }
    }
}

impl Default for Bounds {
    fn default() -> Bounds {
        Bounds {
            min: [f64::INFINITY; 3],
            max: [f64::NEG_INFINITY; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use las::Vector;

    #[test]
    fn from_las() {
        let bounds = Bounds::from(las::Bounds {
            min: Vector {
                x: -1.,
                y: -2.,
                z: -3.,
            },
            max: Vector {
                x: 1.,
                y: 2.,
                z: 3.,
            },
        });
        assert_eq!([-1., -2., -3.], bounds.min);
        assert_eq!([1., 2., 3.], bounds.max);
    }

    #[test]
    fn flatten_keeps_order() {
        let bounds = Bounds {
            min: [10.5, 20.25, -3.],
            max: [11.5, 21.25, 7.],
        };
        assert_eq!([10.5, 20.25, -3., 11.5, 21.25, 7.], bounds.to_f32_array());
    }

    #[test]
    fn default_is_empty() {
        let bounds = Bounds::default();
        assert!(bounds.min[0] > bounds.max[0]);
    }
}
