//! Orientation resolution
//!
//! Geometry first, provenance second: the plane comes from the slice normal
//! and the original/reformatted flag comes from the Image Type values. Both
//! steps are total functions.

use crate::types::{ImageType, Orientation, OrientationVectors, Plane, Provenance};

/// Normals shorter than this are treated as degenerate
const MIN_NORMAL_LENGTH: f64 = 1e-6;

/// Resolves the orientation of a series
///
/// # Example
///
/// ```
/// use mrseries_core::{resolve, ImageType, Orientation, OrientationVectors};
///
/// let coronal = OrientationVectors::new([1.0, 0.0, 0.0], [0.0, 0.0, -1.0]);
/// let flags = vec!["DERIVED".to_string(), "SECONDARY".to_string(), "REFORMATTED".to_string()];
///
/// let orientation = resolve(Some(&coronal), &ImageType::from_flags(&flags));
/// assert_eq!(orientation, Orientation::CoronalReformatted);
/// assert_eq!(resolve(None, &ImageType::default()), Orientation::Unknown);
/// ```
pub fn resolve(vectors: Option<&OrientationVectors>, image_type: &ImageType) -> Orientation {
    Orientation::new(base_plane(vectors), provenance(image_type))
}

/// Derives the anatomical plane from the row and column direction cosines
///
/// The slice normal (row x column) is compared against the patient axes:
/// z gives axial, x sagittal and y coronal. The largest absolute component
/// wins; exact ties prefer axial, then coronal, then sagittal. Absent,
/// zero-length or non-finite vectors give [`Plane::Unknown`].
pub fn base_plane(vectors: Option<&OrientationVectors>) -> Plane {
    let Some(vectors) = vectors else {
        return Plane::Unknown;
    };

    let [x, y, z] = vectors.normal().map(f64::abs);
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Plane::Unknown;
    }
    if (x * x + y * y + z * z).sqrt() < MIN_NORMAL_LENGTH {
        return Plane::Unknown;
    }

    if z >= x && z >= y {
        Plane::Axial
    } else if y >= x {
        Plane::Coronal
    } else {
        Plane::Sagittal
    }
}

/// Reformatted when the third Image Type value is the reformatted marker
pub fn provenance(image_type: &ImageType) -> Provenance {
    if image_type.is_reformatted() {
        Provenance::Reformatted
    } else {
        Provenance::Original
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn image_type(flags: &[&str]) -> ImageType {
        let flags: Vec<String> = flags.iter().map(|s| s.to_string()).collect();
        ImageType::from_flags(&flags)
    }

    #[rstest]
    #[case([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], Plane::Axial)]
    #[case([0.0, 1.0, 0.0], [0.0, 0.0, -1.0], Plane::Sagittal)]
    #[case([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], Plane::Coronal)]
    #[case([0.999, 0.04, 0.0], [-0.04, 0.97, -0.24], Plane::Axial)]
    #[case([0.0, 0.94, -0.34], [0.0, 0.34, 0.94], Plane::Sagittal)]
    #[case([0.99, 0.0, 0.1], [0.1, 0.2, -0.97], Plane::Coronal)]
    fn test_base_plane(#[case] row: [f64; 3], #[case] column: [f64; 3], #[case] expected: Plane) {
        let vectors = OrientationVectors::new(row, column);
        assert_eq!(base_plane(Some(&vectors)), expected);
    }

    #[rstest]
    #[case([0.0, 0.0, 0.0], [0.0, 0.0, 0.0])]
    #[case([1.0, 0.0, 0.0], [1.0, 0.0, 0.0])]
    #[case([1.0, 0.0, 0.0], [0.0, 0.0, 0.0])]
    #[case([f64::NAN, 0.0, 0.0], [0.0, 1.0, 0.0])]
    #[case([f64::INFINITY, 0.0, 0.0], [0.0, 1.0, 0.0])]
    fn test_degenerate_vectors_are_unknown(#[case] row: [f64; 3], #[case] column: [f64; 3]) {
        let vectors = OrientationVectors::new(row, column);
        assert_eq!(base_plane(Some(&vectors)), Plane::Unknown);
        assert_eq!(
            resolve(Some(&vectors), &image_type(&["DERIVED", "SECONDARY", "REFORMATTED"])),
            Orientation::Unknown
        );
    }

    #[test]
    fn test_absent_vectors_are_unknown() {
        assert_eq!(base_plane(None), Plane::Unknown);
    }

    #[rstest]
    #[case(&[], Provenance::Original)]
    #[case(&["ORIGINAL"], Provenance::Original)]
    #[case(&["DERIVED", "SECONDARY"], Provenance::Original)]
    #[case(&["ORIGINAL", "PRIMARY", "ORIGINAL"], Provenance::Original)]
    #[case(&["DERIVED", "SECONDARY", "REFORMATTED"], Provenance::Reformatted)]
    #[case(&["DERIVED", "SECONDARY", "REFORMATTED", "AVERAGE"], Provenance::Reformatted)]
    #[case(&["DERIVED", "SECONDARY", "reformatted"], Provenance::Original)]
    fn test_provenance(#[case] flags: &[&str], #[case] expected: Provenance) {
        assert_eq!(provenance(&image_type(flags)), expected);
    }

    #[test]
    fn test_resolution_is_total_and_repeatable() {
        let planes = [
            None,
            Some(OrientationVectors::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0])),
            Some(OrientationVectors::new([0.0, 1.0, 0.0], [0.0, 0.0, -1.0])),
            Some(OrientationVectors::new([1.0, 0.0, 0.0], [0.0, 0.0, -1.0])),
            Some(OrientationVectors::new([0.0; 3], [0.0; 3])),
        ];
        let flag_sets: [&[&str]; 3] = [
            &[],
            &["ORIGINAL", "PRIMARY", "OTHER"],
            &["DERIVED", "SECONDARY", "REFORMATTED"],
        ];

        for vectors in planes.iter() {
            for flags in flag_sets.iter() {
                let parsed = image_type(flags);
                let first = resolve(vectors.as_ref(), &parsed);
                let second = resolve(vectors.as_ref(), &parsed);
                assert_eq!(first, second);
                if base_plane(vectors.as_ref()) != Plane::Unknown {
                    assert_eq!(first.provenance(), provenance(&parsed));
                }
            }
        }
    }

    #[test]
    fn test_exact_tie_prefers_axial() {
        // normal = (0, -1, 1)
        let vectors = OrientationVectors::new([1.0, 0.0, 0.0], [0.0, 1.0, 1.0]);
        assert_eq!(base_plane(Some(&vectors)), Plane::Axial);
    }
}
