use clap::ValueEnum;
use ellbox_core::BoxParams;

/// Length unit of dimensions given on the command line or in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Unit {
    #[default]
    Mm,
    Cm,
    In,
    Pt,
    /// CSS pixels, 96 per inch
    Px,
}

impl Unit {
    /// Millimeters per unit.
    pub fn mm(self) -> f64 {
        match self {
            Unit::Mm => 1.,
            Unit::Cm => 10.,
            Unit::In => 25.4,
            Unit::Pt => 25.4 / 72.,
            Unit::Px => 25.4 / 96.,
        }
    }

    /// Convert the lengths in `params` from this unit to millimeters; angles and counts are untouched.
    pub fn to_mm(self, params: BoxParams) -> BoxParams {
        let f = self.mm();
        BoxParams {
            width: params.width * f,
            height: params.height * f,
            depth: params.depth * f,
            thickness: params.thickness * f,
            cut_spacing: params.cut_spacing * f,
            ..params
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use test_log::test;

    use super::*;

    #[test]
    fn test_to_mm() {
        let params = BoxParams { width: 4., height: 2., depth: 1., thickness: 0.125, cut_spacing: 0.0625, ..Default::default() };
        let mm = Unit::In.to_mm(params.clone());
        assert_relative_eq!(mm.width, 101.6);
        assert_relative_eq!(mm.height, 50.8);
        assert_relative_eq!(mm.thickness, 3.175);
        assert_eq!(mm.lid_angle, params.lid_angle);
        assert_eq!(mm.cut_count, params.cut_count);
        assert_eq!(Unit::Mm.to_mm(params.clone()), params);
    }

    #[test]
    fn test_factors() {
        assert_relative_eq!(72. * Unit::Pt.mm(), 96. * Unit::Px.mm());
        assert_relative_eq!(Unit::Cm.mm(), 10. * Unit::Mm.mm());
    }
}
