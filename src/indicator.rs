/// Indicator dot, one per slide, active flag kept in lockstep with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indicator {
    pub active: bool,
}
