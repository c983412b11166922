use super::{StrandAxis, WeaveParameters};

/// Effective grid constants of one build, derived once from the parameters.
///
/// Spacing and weave height are raised to the collision clearance
/// `2 * max_radius + collision_padding` when the caller asks for less.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaveGrid {
    pub thread_count_u: usize,
    pub thread_count_v: usize,
    pub spacing: f64,
    pub weave_height: f64,
    pub max_radius: f64,
    pub clearance: f64,
    /// Half of the span covered by warp strands (along y)
    pub half_u: f64,
    /// Half of the span covered by weft strands (along x)
    pub half_v: f64,
}

impl WeaveGrid {
    pub fn new(params: &WeaveParameters) -> Self {
        let params = params.sanitized();
        let max_radius = params
            .radius_start
            .max(params.radius_mid)
            .max(params.radius_end);
        let clearance = 2. * max_radius + params.collision_padding;

        let spacing = params.spacing.max(clearance);
        if spacing > params.spacing {
            log::debug!(
                "spacing raised from {} to {} to clear strand radius {}",
                params.spacing,
                spacing,
                max_radius
            );
        }
        let weave_height = params.weave_height.max(clearance);
        if weave_height > params.weave_height {
            log::debug!(
                "weave height raised from {} to {} to clear strand radius {}",
                params.weave_height,
                weave_height,
                max_radius
            );
        }

        let u = params.thread_count_u;
        let v = params.thread_count_v;
        Self {
            thread_count_u: u,
            thread_count_v: v,
            spacing,
            weave_height,
            max_radius,
            clearance,
            half_u: (u - 1) as f64 * spacing * 0.5,
            half_v: (v - 1) as f64 * spacing * 0.5,
        }
    }

    pub fn total_strands(&self) -> usize {
        self.thread_count_u + self.thread_count_v
    }

    /// Axis and axis-local index of a global strand index.
    /// Warp strands come first.
    pub fn locate(&self, strand_index: usize) -> (StrandAxis, usize) {
        if strand_index < self.thread_count_u {
            (StrandAxis::Warp, strand_index)
        } else {
            (StrandAxis::Weft, strand_index - self.thread_count_u)
        }
    }

    /// Fixed lateral coordinate of a strand
    pub fn lateral(&self, axis: StrandAxis, local_index: usize) -> f64 {
        let half = match axis {
            StrandAxis::Warp => self.half_u,
            StrandAxis::Weft => self.half_v,
        };
        -half + local_index as f64 * self.spacing
    }

    /// Half extent of the swept coordinate of a strand, which spans the perpendicular family
    pub fn swept_half(&self, axis: StrandAxis) -> f64 {
        match axis {
            StrandAxis::Warp => self.half_v,
            StrandAxis::Weft => self.half_u,
        }
    }
}
