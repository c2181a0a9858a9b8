//! Steering parameters and the sparse runtime-update type.
//!
//! # Design
//!
//! Agents carry a plain [`SteeringParams`] value — a fixed struct, not a
//! dynamic dictionary.  Runtime reconfiguration goes through
//! [`ParamUpdate`], a partial-update type with one `Option<f32>` per
//! settable field: a caller can push `{ max_speed: 0.5 }` without
//! disturbing anything else.
//!
//! Callers holding *dynamic* key/value pairs (UI sliders, parsed query
//! strings) use [`ParamUpdate::set`], which consults the
//! [`ParamUpdate::FIELDS`] allow-list and silently ignores unknown keys —
//! an unknown key is not an error, it is simply not a parameter.
//!
//! The engine performs no range validation at runtime: distances and
//! weights are expected to be non-negative finite numbers, and the caller
//! owns that contract.

/// Tunable steering parameters for one agent.
///
/// | Field                                  | Effect                                             |
/// |----------------------------------------|----------------------------------------------------|
/// | `max_force`                            | caps each individual steering contribution         |
/// | `max_speed`                            | caps velocity magnitude after integration          |
/// | `separation_dist`                      | neighbor radius for the separation term            |
/// | `align_dist`                           | neighbor radius for the alignment term             |
/// | `cohesion_dist`                        | neighbor radius for the cohesion term              |
/// | `home_dist`                            | radius beyond which the home-return force activates|
/// | `separation_weight` … `home_weight`    | per-term blend weights                             |
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringParams {
    pub max_force: f32,
    pub max_speed: f32,

    pub separation_dist: f32,
    pub align_dist: f32,
    pub cohesion_dist: f32,
    pub home_dist: f32,

    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub home_weight: f32,
}

impl SteeringParams {
    /// Fine-grained preset tuned for 3-D flocks in a small world
    /// (sub-unit speeds, tight separation radius).
    pub fn fine_3d() -> Self {
        Self {
            max_force: 0.03,
            max_speed: 0.4,
            separation_dist: 1.1,
            align_dist: 10.0,
            cohesion_dist: 10.0,
            home_dist: 400.0,
            separation_weight: 1.5,
            alignment_weight: 1.1,
            cohesion_weight: 1.0,
            home_weight: 0.2,
        }
    }

    /// Coarser preset tuned for 2-D flocks on pixel-scale coordinates.
    pub fn coarse_2d() -> Self {
        Self {
            max_force: 0.2,
            max_speed: 1.6,
            separation_dist: 24.0,
            align_dist: 100.0,
            cohesion_dist: 100.0,
            home_dist: 200.0,
            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            home_weight: 0.1,
        }
    }
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self::fine_3d()
    }
}

// ── ParamUpdate ───────────────────────────────────────────────────────────────

/// A sparse update to [`SteeringParams`].
///
/// Fields left as `None` are untouched by [`apply_to`][Self::apply_to].
/// With the `serde` feature this deserializes from a partial document, so
/// `{"max_speed": 0.5}` is a complete, valid update.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParamUpdate {
    pub max_force: Option<f32>,
    pub max_speed: Option<f32>,
    pub separation_dist: Option<f32>,
    pub align_dist: Option<f32>,
    pub cohesion_dist: Option<f32>,
    pub home_dist: Option<f32>,
    pub separation_weight: Option<f32>,
    pub alignment_weight: Option<f32>,
    pub cohesion_weight: Option<f32>,
    pub home_weight: Option<f32>,
}

impl ParamUpdate {
    /// The allow-list of settable field names, in declaration order.
    /// [`set`][Self::set] accepts exactly these keys and no others.
    pub const FIELDS: [&'static str; 10] = [
        "max_force",
        "max_speed",
        "separation_dist",
        "align_dist",
        "cohesion_dist",
        "home_dist",
        "separation_weight",
        "alignment_weight",
        "cohesion_weight",
        "home_weight",
    ];

    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    // Fluent setters for the common "override one or two fields" case.

    pub fn max_force(mut self, v: f32) -> Self {
        self.max_force = Some(v);
        self
    }

    pub fn max_speed(mut self, v: f32) -> Self {
        self.max_speed = Some(v);
        self
    }

    pub fn separation_dist(mut self, v: f32) -> Self {
        self.separation_dist = Some(v);
        self
    }

    pub fn align_dist(mut self, v: f32) -> Self {
        self.align_dist = Some(v);
        self
    }

    pub fn cohesion_dist(mut self, v: f32) -> Self {
        self.cohesion_dist = Some(v);
        self
    }

    pub fn home_dist(mut self, v: f32) -> Self {
        self.home_dist = Some(v);
        self
    }

    pub fn separation_weight(mut self, v: f32) -> Self {
        self.separation_weight = Some(v);
        self
    }

    pub fn alignment_weight(mut self, v: f32) -> Self {
        self.alignment_weight = Some(v);
        self
    }

    pub fn cohesion_weight(mut self, v: f32) -> Self {
        self.cohesion_weight = Some(v);
        self
    }

    pub fn home_weight(mut self, v: f32) -> Self {
        self.home_weight = Some(v);
        self
    }

    /// Set a field by name.  Returns `false` (and changes nothing) for a
    /// key outside [`FIELDS`][Self::FIELDS] — whitelist semantics, not a
    /// validation failure.
    pub fn set(&mut self, key: &str, value: f32) -> bool {
        match key {
            "max_force" => self.max_force = Some(value),
            "max_speed" => self.max_speed = Some(value),
            "separation_dist" => self.separation_dist = Some(value),
            "align_dist" => self.align_dist = Some(value),
            "cohesion_dist" => self.cohesion_dist = Some(value),
            "home_dist" => self.home_dist = Some(value),
            "separation_weight" => self.separation_weight = Some(value),
            "alignment_weight" => self.alignment_weight = Some(value),
            "cohesion_weight" => self.cohesion_weight = Some(value),
            "home_weight" => self.home_weight = Some(value),
            _ => return false,
        }
        true
    }

    /// Overwrite every `Some` field on `params`, leaving the rest intact.
    pub fn apply_to(&self, params: &mut SteeringParams) {
        if let Some(v) = self.max_force {
            params.max_force = v;
        }
        if let Some(v) = self.max_speed {
            params.max_speed = v;
        }
        if let Some(v) = self.separation_dist {
            params.separation_dist = v;
        }
        if let Some(v) = self.align_dist {
            params.align_dist = v;
        }
        if let Some(v) = self.cohesion_dist {
            params.cohesion_dist = v;
        }
        if let Some(v) = self.home_dist {
            params.home_dist = v;
        }
        if let Some(v) = self.separation_weight {
            params.separation_weight = v;
        }
        if let Some(v) = self.alignment_weight {
            params.alignment_weight = v;
        }
        if let Some(v) = self.cohesion_weight {
            params.cohesion_weight = v;
        }
        if let Some(v) = self.home_weight {
            params.home_weight = v;
        }
    }

    /// `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
