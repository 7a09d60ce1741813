//! Rule-based mitigation planning for asteroid threats.
//!
//! Each rule pairs a condition on the threat parameters (size, warning
//! time, impact energy) with a fixed strategy. Rules are independent and
//! evaluated in a fixed order; the plan lists strategies in the order their
//! rules fired, which is not a priority ranking.

use std::fmt;

use neo_impact::{Impactor, ImpactError, compute_impact};

/// A deflection or civil-defense tactic the rule table can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    GravityTractor,
    KineticImpactor,
    NuclearDeflection,
    IonBeamShepherd,
    EnhancedYarkovsky,
    CivilDefense,
    Fragmentation,
    MultipleDeflectionMissions,
}

impl Strategy {
    /// Fixed strategy text rendered verbatim by front-ends.
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::GravityTractor => {
                "Gravity Tractor — Gradually alter trajectory using spacecraft's gravitational pull"
            }
            Strategy::KineticImpactor => {
                "Kinetic Impactor — High-speed collision to deflect asteroid"
            }
            Strategy::NuclearDeflection => {
                "Nuclear Deflection — Controlled nuclear explosion to alter course"
            }
            Strategy::IonBeamShepherd => {
                "Ion Beam Shepherd — Use focused ion beams to slowly push asteroid"
            }
            Strategy::EnhancedYarkovsky => {
                "Enhanced Yarkovsky Effect — Paint surface to use solar radiation for deflection"
            }
            Strategy::CivilDefense => "Civil Defense — Evacuation and emergency preparation",
            Strategy::Fragmentation => "Fragmentation — Break into smaller pieces (last resort)",
            Strategy::MultipleDeflectionMissions => {
                "Multiple Deflection Missions — Coordinate several spacecraft for maximum effect"
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Strategies recommended for one threat, in rule-firing order.
///
/// An empty plan is a valid outcome: a large body on short warning with
/// moderate energy matches no rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MitigationPlan {
    pub strategies: Vec<Strategy>,
}

impl MitigationPlan {
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Strategy texts in plan order.
    pub fn descriptions(&self) -> Vec<&'static str> {
        self.strategies.iter().map(Strategy::description).collect()
    }
}

/// Evaluate the mitigation rule table for a threat.
///
/// The impactor is validated through the underlying impact evaluation; the
/// warning time is taken as-is. Strictly more than ten years of warning
/// enables the slow-push missions, under five years leaves only emergency
/// response, and boundary values fall through both sides.
pub fn plan_mitigation(
    impactor: &Impactor,
    time_to_impact_years: f64,
) -> Result<MitigationPlan, ImpactError> {
    let impact = compute_impact(impactor)?;
    let mut strategies = Vec::new();

    if time_to_impact_years > 10.0 {
        strategies.push(Strategy::GravityTractor);
        strategies.push(Strategy::KineticImpactor);
    }

    if time_to_impact_years > 5.0 {
        strategies.push(Strategy::NuclearDeflection);
    }

    if impactor.diameter_m < 50.0 {
        strategies.push(Strategy::IonBeamShepherd);
    }

    if time_to_impact_years > 20.0 && impactor.diameter_m < 100.0 {
        strategies.push(Strategy::EnhancedYarkovsky);
    }

    if time_to_impact_years < 5.0 {
        strategies.push(Strategy::CivilDefense);
        strategies.push(Strategy::Fragmentation);
    }

    if impact.energy_megatons > 1000.0 {
        strategies.push(Strategy::MultipleDeflectionMissions);
    }

    Ok(MitigationPlan { strategies })
}
