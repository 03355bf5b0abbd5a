//! Scalar math and mask operations.

/// Two-operand math nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    Min,
    Max,
}

/// Mask blend modes, by catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    Add,
    Multiply,
    Max,
    Min,
    Screen,
    Overlay,
}

impl BlendMode {
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => BlendMode::Multiply,
            2 => BlendMode::Max,
            3 => BlendMode::Min,
            4 => BlendMode::Screen,
            5 => BlendMode::Overlay,
            _ => BlendMode::Add,
        }
    }
}

/// Apply a binary op. Division and modulo by zero yield 0, as does any
/// non-finite power.
pub(super) fn binary(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Subtract => a - b,
        BinaryOp::Multiply => a * b,
        BinaryOp::Divide if b == 0.0 => 0.0,
        BinaryOp::Divide => a / b,
        BinaryOp::Power => {
            let v = a.powf(b);
            if v.is_finite() {
                v
            } else {
                0.0
            }
        }
        BinaryOp::Modulo if b == 0.0 => 0.0,
        // Floored modulo: the result takes the divisor's sign.
        BinaryOp::Modulo => a - b * (a / b).floor(),
        BinaryOp::Min => a.min(b),
        BinaryOp::Max => a.max(b),
    }
}

/// Hermite step between two edges. Equal edges degrade to a hard step.
pub(super) fn smoothstep_between(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Hard threshold, or a smooth ramp of width `softness` centred on it.
pub(super) fn threshold(value: f64, edge: f64, softness: f64) -> f64 {
    if softness <= 0.0 {
        return if value >= edge { 1.0 } else { 0.0 };
    }
    let half = softness * 0.5;
    smoothstep_between(edge - half, edge + half, value)
}

/// Blend mask `b` over `a`, mixed in by `opacity`. Inputs and result are
/// clamped to `[0, 1]`.
pub(super) fn blend_masks(mode: BlendMode, a: f64, b: f64, opacity: f64) -> f64 {
    let a = a.clamp(0.0, 1.0);
    let b = b.clamp(0.0, 1.0);
    let blended = match mode {
        BlendMode::Add => (a + b).min(1.0),
        BlendMode::Multiply => a * b,
        BlendMode::Max => a.max(b),
        BlendMode::Min => a.min(b),
        BlendMode::Screen => 1.0 - (1.0 - a) * (1.0 - b),
        BlendMode::Overlay if a < 0.5 => 2.0 * a * b,
        BlendMode::Overlay => 1.0 - 2.0 * (1.0 - a) * (1.0 - b),
    };
    (a + (blended - a) * opacity.clamp(0.0, 1.0)).clamp(0.0, 1.0)
}
