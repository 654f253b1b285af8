//! Monetary exposure model. All amounts are in millions of euros.

use serde::{Deserialize, Serialize};

use super::domain::{OrganizationProfile, OrganizationRole, SizeBracket};

/// Share of revenue typically spent on a compliance programme.
pub const COMPLIANCE_INVESTMENT_RATE: f64 = 0.002;

/// Turnover rate and absolute cap for one role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RolePenalty {
    pub rate: f64,
    pub cap: f64,
}

impl RolePenalty {
    pub fn max_penalty(&self, revenue: f64) -> f64 {
        (revenue * self.rate).min(self.cap)
    }
}

/// Policy constants behind the estimate. Defaults follow the Act's top fine tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyPolicy {
    pub provider: RolePenalty,
    pub deployer: RolePenalty,
}

impl Default for PenaltyPolicy {
    fn default() -> Self {
        Self {
            provider: RolePenalty {
                rate: 0.07,
                cap: 35.0,
            },
            deployer: RolePenalty {
                rate: 0.03,
                cap: 20.0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PenaltyPolicyError {
    #[error("{role} penalty rate must be within 0..=1 (found {value})")]
    Rate { role: &'static str, value: f64 },
    #[error("{role} penalty cap must be a non-negative amount (found {value})")]
    Cap { role: &'static str, value: f64 },
}

impl PenaltyPolicy {
    pub fn validate(&self) -> Result<(), PenaltyPolicyError> {
        for (role, penalty) in [("provider", self.provider), ("deployer", self.deployer)] {
            if !penalty.rate.is_finite() || !(0.0..=1.0).contains(&penalty.rate) {
                return Err(PenaltyPolicyError::Rate {
                    role,
                    value: penalty.rate,
                });
            }
            if !penalty.cap.is_finite() || penalty.cap < 0.0 {
                return Err(PenaltyPolicyError::Cap {
                    role,
                    value: penalty.cap,
                });
            }
        }
        Ok(())
    }

    /// Ceiling for the role. An organization acting as both carries the larger exposure.
    pub fn max_penalty(&self, role: OrganizationRole, revenue: f64) -> f64 {
        match role {
            OrganizationRole::Provider => self.provider.max_penalty(revenue),
            OrganizationRole::Deployer => self.deployer.max_penalty(revenue),
            OrganizationRole::Both => self
                .provider
                .max_penalty(revenue)
                .max(self.deployer.max_penalty(revenue)),
        }
    }
}

/// Estimated annual revenue for a headcount bracket.
pub fn revenue_tier(size: SizeBracket) -> f64 {
    match size {
        SizeBracket::Micro | SizeBracket::Small => 10.0,
        SizeBracket::Medium => 50.0,
        SizeBracket::Large => 200.0,
        SizeBracket::Enterprise => 1000.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PenaltyEstimate {
    pub role: OrganizationRole,
    pub revenue_tier: f64,
    pub max_penalty: f64,
    pub risk_factor: f64,
    pub estimated_exposure: f64,
    pub compliance_investment: f64,
}

/// `max_penalty * (100 - compliance) / 100`, with compliance clamped to `0..=100`.
pub fn estimate_penalty(
    policy: &PenaltyPolicy,
    overall_compliance: f64,
    profile: &OrganizationProfile,
    role: OrganizationRole,
) -> PenaltyEstimate {
    let compliance = if overall_compliance.is_nan() {
        0.0
    } else {
        overall_compliance.clamp(0.0, 100.0)
    };

    let revenue = revenue_tier(profile.size);
    let max_penalty = policy.max_penalty(role, revenue);
    let risk_factor = (100.0 - compliance) / 100.0;

    PenaltyEstimate {
        role,
        revenue_tier: revenue,
        max_penalty,
        risk_factor,
        estimated_exposure: max_penalty * risk_factor,
        compliance_investment: revenue * COMPLIANCE_INVESTMENT_RATE,
    }
}
