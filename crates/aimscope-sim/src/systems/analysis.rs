//! Session analyzer: directional miss bias, lead/lag on moving targets and
//! a single coaching recommendation.
//!
//! Pure function of the shot log and scenario. Branches are evaluated in a
//! fixed priority order and the first match wins.

use aimscope_core::constants::*;
use aimscope_core::enums::{Recommendation, ScenarioId};
use aimscope_core::state::{Analysis, MissDetail, MissOffset, SessionStats, ShotRecord};

/// Analyze a frozen session.
pub fn analyze_session(stats: &SessionStats) -> Analysis {
    analyze(&stats.shot_log, stats.scenario)
}

/// Analyze a shot log for the given scenario.
pub fn analyze(shot_log: &[ShotRecord], scenario: ScenarioId) -> Analysis {
    let misses: Vec<&MissDetail> = shot_log.iter().filter_map(ShotRecord::miss).collect();
    if misses.is_empty() {
        return Analysis::perfect();
    }

    let offsets: Vec<&MissOffset> = misses.iter().filter_map(|m| m.offset.as_ref()).collect();
    let count = |pred: fn(&MissOffset) -> bool| offsets.iter().filter(|o| pred(o)).count() as u32;

    let left = count(|o| o.relative_x < 0.0);
    let right = count(|o| o.relative_x > 0.0);
    let top = count(|o| o.relative_y > 0.0);
    let bottom = count(|o| o.relative_y < 0.0);

    let (overshoots, undershoots) = if scenario.is_tracking() {
        lead_lag_counts(&misses)
    } else {
        (0, 0)
    };

    let avg_spread = if offsets.is_empty() {
        0.0
    } else {
        offsets.iter().map(|o| o.relative_x.abs()).sum::<f64>() / offsets.len() as f64
    };

    let mut analysis = Analysis {
        left,
        right,
        top,
        bottom,
        overshoots,
        undershoots,
        total_misses: misses.len() as u32,
        avg_spread,
        recommendation: Recommendation::Balanced,
        message: String::new(),
    };
    analysis.recommendation = recommend(scenario, &analysis);
    analysis.message = analysis.recommendation.message().to_string();
    analysis
}

/// Count overshoots (aim ended up further along the target's direction of
/// travel) and undershoots (aim trailed it). Misses without a velocity or an
/// offset, or with either component at zero, count as neither.
fn lead_lag_counts(misses: &[&MissDetail]) -> (u32, u32) {
    let mut overshoots = 0;
    let mut undershoots = 0;
    for miss in misses {
        let (Some(vx), Some(offset)) = (miss.target_velocity_x, miss.offset) else {
            continue;
        };
        let rx = offset.relative_x;
        if (vx > 0.0 && rx > 0.0) || (vx < 0.0 && rx < 0.0) {
            overshoots += 1;
        } else if (vx > 0.0 && rx < 0.0) || (vx < 0.0 && rx > 0.0) {
            undershoots += 1;
        }
    }
    (overshoots, undershoots)
}

fn recommend(scenario: ScenarioId, a: &Analysis) -> Recommendation {
    if scenario.is_tracking() {
        let over = a.overshoots as f64;
        let under = a.undershoots as f64;
        if over > under * TRACKING_BIAS_RATIO && a.overshoots > TRACKING_BIAS_MIN_COUNT {
            return Recommendation::Overshooting;
        }
        if under > over * TRACKING_BIAS_RATIO && a.undershoots > TRACKING_BIAS_MIN_COUNT {
            return Recommendation::Undershooting;
        }
        return Recommendation::Balanced;
    }

    let total = a.total_misses as f64;
    let horizontal_bias = a.left.abs_diff(a.right) as f64;
    let vertical_bias = a.top.abs_diff(a.bottom) as f64;

    if horizontal_bias > total * DIRECTIONAL_BIAS_SHARE {
        return if a.left > a.right {
            Recommendation::PullingLeft
        } else {
            Recommendation::PullingRight
        };
    }
    if vertical_bias > total * DIRECTIONAL_BIAS_SHARE {
        return Recommendation::VerticalDrift;
    }
    if a.avg_spread > WIDE_SPREAD_THRESHOLD {
        return Recommendation::WideScatter;
    }
    Recommendation::Balanced
}
