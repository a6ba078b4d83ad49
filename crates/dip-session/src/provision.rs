//! Platform roles and channels a game needs.
//!
//! The engine never talks to the chat platform. Instead, transitions that
//! require platform changes return a plan here, and the transport applies it
//! after the session lock has been released.

use serde::Serialize;

use dip_core::{Faction, Participant};

use crate::config::BotConfig;
use crate::draw::Assignment;

/// Role and private channel for one faction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactionProvision {
    /// The faction.
    pub faction: Faction,
    /// Name of the faction's role.
    pub role: String,
    /// Name of the faction's private text channel.
    pub channel: String,
    /// Player to grant the role to; `None` for an unfilled faction.
    pub holder: Option<Participant>,
}

/// Everything the transport must create or sync when a game starts.
///
/// Each faction channel is readable and writable by its faction role and by
/// the adjudicator role, and closed to the shared player role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionPlan {
    /// Category holding the faction channels.
    pub category: String,
    /// Role given to every seated player.
    pub player_role: String,
    /// Role allowed into every faction channel.
    pub adjudicator_role: String,
    /// Per-faction roles and channels in nation order.
    pub factions: Vec<FactionProvision>,
}

impl ProvisionPlan {
    /// Build the plan for a freshly drawn assignment.
    pub fn for_assignment(assignment: &Assignment, config: &BotConfig) -> Self {
        let factions = assignment
            .iter()
            .map(|(faction, holder)| FactionProvision {
                faction,
                role: faction.slug().to_string(),
                channel: faction.slug().to_string(),
                holder: holder.cloned(),
            })
            .collect();

        Self {
            category: config.channel_category.clone(),
            player_role: config.player_role.clone(),
            adjudicator_role: config.adjudicator_role.clone(),
            factions,
        }
    }

    /// Players that receive a faction role.
    pub fn seated(&self) -> impl Iterator<Item = (&Participant, Faction)> {
        self.factions
            .iter()
            .filter_map(|f| f.holder.as_ref().map(|p| (p, f.faction)))
    }

    /// Render the plan as a list of steps.
    pub fn describe(&self) -> String {
        let mut out = format!(
            "ensure roles {}, {} and category {}\n",
            self.player_role, self.adjudicator_role, self.category
        );
        for f in &self.factions {
            let holder = f
                .holder
                .as_ref()
                .map_or_else(|| "(unfilled)".to_string(), |p| p.name.clone());
            out.push_str(&format!(
                "#{} <- role {} + {}: {holder}\n",
                f.channel, f.role, self.adjudicator_role
            ));
        }
        out.trim_end().to_string()
    }
}

/// Channels and roles to clean up when a game ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeardownPlan {
    /// Faction channels to delete.
    pub channels: Vec<String>,
    /// Faction roles to revoke from their holders.
    pub roles: Vec<String>,
}

impl TeardownPlan {
    /// Remove every faction channel and role.
    pub fn all_factions() -> Self {
        let slugs: Vec<String> = Faction::ALL.iter().map(|f| f.slug().to_string()).collect();
        Self {
            channels: slugs.clone(),
            roles: slugs,
        }
    }

    /// Render the plan as a list of steps.
    pub fn describe(&self) -> String {
        let channels: Vec<String> = self.channels.iter().map(|c| format!("#{c}")).collect();
        format!(
            "delete channels {}\nrevoke roles {}",
            channels.join(", "),
            self.roles.join(", ")
        )
    }
}

/// A platform side effect the transport should perform for a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Create roles and channels and hand out faction roles.
    Provision(ProvisionPlan),
    /// Delete faction channels and revoke roles.
    Teardown(TeardownPlan),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{draw_factions, seat_roster};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assignment(players: usize) -> Assignment {
        let roster: Vec<_> = (0..players)
            .map(|i| Participant::new(i as u64, format!("p{i}")))
            .collect();
        draw_factions(seat_roster(&roster), &mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn plan_covers_every_faction() {
        let plan = ProvisionPlan::for_assignment(&assignment(7), &BotConfig::default());
        assert_eq!(plan.factions.len(), 7);
        assert_eq!(plan.factions[0].channel, "austria");
        assert_eq!(plan.factions[6].role, "turkey");
        assert_eq!(plan.seated().count(), 7);
        assert_eq!(plan.player_role, "Diplomat");
        assert_eq!(plan.category, "Diplomacy");
    }

    #[test]
    fn unfilled_factions_have_no_holder() {
        let plan = ProvisionPlan::for_assignment(&assignment(2), &BotConfig::default());
        assert_eq!(plan.seated().count(), 2);
        assert_eq!(plan.describe().matches("(unfilled)").count(), 5);
    }

    #[test]
    fn plan_uses_configured_roles() {
        let config = BotConfig {
            player_role: "Player".to_string(),
            adjudicator_role: "GM".to_string(),
            ..BotConfig::default()
        };
        let plan = ProvisionPlan::for_assignment(&assignment(1), &config);
        assert!(plan.describe().starts_with("ensure roles Player, GM"));
        assert!(plan.describe().contains("#france <- role france + GM"));
    }

    #[test]
    fn teardown_lists_all_channels() {
        let plan = TeardownPlan::all_factions();
        assert_eq!(plan.channels.len(), 7);
        assert!(plan.describe().contains("#italy"));
    }

    #[test]
    fn effect_serializes_with_tag() {
        let json = serde_json::to_value(Effect::Teardown(TeardownPlan::all_factions())).unwrap();
        assert_eq!(json["effect"], "teardown");
        assert_eq!(json["channels"][0], "austria");
    }
}
