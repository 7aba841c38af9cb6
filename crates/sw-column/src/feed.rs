//! Feed thermal condition.
//!
//! q is the fraction of the feed that joins the liquid flowing down the
//! column: 1 for saturated liquid, 0 for saturated vapor, above 1 for a
//! subcooled feed that condenses vapor, below 0 for a superheated feed.

use crate::error::{ColumnError, ColumnResult};
use serde::Serialize;
use std::ops::{Add, Mul};
use sw_core::units::{Temperature, delta_k, to_degc, to_unitless};
use sw_core::{Tolerances, nearly_equal};
use sw_props::SubstanceProperties;
use sw_vle::RaoultBinary;
use tracing::debug;

const SATURATION_TOL: Tolerances = Tolerances {
    abs: 1e-9,
    rel: 0.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedCondition {
    SubcooledLiquid,
    SaturatedLiquid,
    TwoPhase,
    SaturatedVapor,
    SuperheatedVapor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedQuality {
    pub q: f64,
    pub condition: FeedCondition,
    pub t_feed_c: f64,
    pub t_bubble_c: f64,
    pub t_dew_c: f64,
}

/// Feed quality from the feed temperature.
///
/// `props` are the (light, heavy) pure-component data; heat capacities and
/// latent heat are mole-fraction averages at the feed composition.
pub fn feed_quality(
    model: &RaoultBinary,
    props: (&SubstanceProperties, &SubstanceProperties),
    x_feed: f64,
    t_feed: Temperature,
) -> ColumnResult<FeedQuality> {
    let t_feed_c = to_degc(t_feed);
    if !t_feed_c.is_finite() {
        return Err(ColumnError::InvalidArg {
            what: "feed temperature must be finite",
        });
    }
    let t_bubble_c = to_degc(model.bubble_temperature(x_feed)?);
    let t_dew_c = to_degc(model.dew_temperature(x_feed)?);

    let (light, heavy) = props;
    let latent = mole_average(x_feed, light.latent_heat(), heavy.latent_heat());
    let cp_liquid = mole_average(x_feed, light.cp_liquid(), heavy.cp_liquid());
    let cp_vapor = mole_average(x_feed, light.cp_vapor(), heavy.cp_vapor());
    if latent.value <= 0.0 {
        return Err(ColumnError::InvalidArg {
            what: "latent heat must be positive",
        });
    }

    let (q, condition) = if nearly_equal(t_feed_c, t_bubble_c, SATURATION_TOL) {
        (1.0, FeedCondition::SaturatedLiquid)
    } else if nearly_equal(t_feed_c, t_dew_c, SATURATION_TOL) {
        (0.0, FeedCondition::SaturatedVapor)
    } else if t_feed_c < t_bubble_c {
        let sensible = cp_liquid * delta_k(t_bubble_c - t_feed_c);
        (
            1.0 + to_unitless(sensible / latent),
            FeedCondition::SubcooledLiquid,
        )
    } else if t_feed_c > t_dew_c {
        let sensible = cp_vapor * delta_k(t_feed_c - t_dew_c);
        (
            -to_unitless(sensible / latent),
            FeedCondition::SuperheatedVapor,
        )
    } else {
        (
            (t_dew_c - t_feed_c) / (t_dew_c - t_bubble_c),
            FeedCondition::TwoPhase,
        )
    };

    debug!(q, ?condition, t_feed_c, t_bubble_c, t_dew_c, "feed quality");
    Ok(FeedQuality {
        q,
        condition,
        t_feed_c,
        t_bubble_c,
        t_dew_c,
    })
}

fn mole_average<Q>(x_light: f64, light: Q, heavy: Q) -> Q
where
    Q: Mul<f64, Output = Q> + Add<Output = Q>,
{
    light * x_light + heavy * (1.0 - x_light)
}

/// [`feed_quality`] for a model built from catalog substances.
pub fn feed_quality_of_components(
    model: &RaoultBinary,
    x_feed: f64,
    t_feed: Temperature,
) -> ColumnResult<FeedQuality> {
    let (light, heavy) = model.components().ok_or(ColumnError::InvalidArg {
        what: "feed quality needs catalog components for heat data",
    })?;
    feed_quality(
        model,
        (light.properties(), heavy.properties()),
        x_feed,
        t_feed,
    )
}
