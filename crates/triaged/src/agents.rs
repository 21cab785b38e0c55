//! Agent roster and load-aware assignment.
//!
//! The roster is the only mutable shared state in the service. Selection and
//! the load increment happen inside one `assign` call, so a caller holding
//! the registry write lock cannot lose increments to a concurrent triage.

use crate::config::AgentSeed;
use serde::{Deserialize, Serialize};
use triage_common::{Category, TriageError};

/// A support agent with a skill set and a live load counter.
///
/// Load only ever goes up within a process lifetime; resolution-side
/// decrements are out of scope for this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub skills: Vec<Category>,
    pub load: u32,
}

impl Agent {
    pub fn has_skill(&self, category: &Category) -> bool {
        self.skills.contains(category)
    }
}

/// In-memory agent roster. Insertion order is the tie-break order.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: Vec<Agent>,
}

impl AgentRegistry {
    /// An empty roster is a configuration failure, caught at startup.
    pub fn new(agents: Vec<Agent>) -> Result<Self, TriageError> {
        if agents.is_empty() {
            return Err(TriageError::EmptyRegistry);
        }
        Ok(Self { agents })
    }

    pub fn from_seeds(seeds: &[AgentSeed]) -> Result<Self, TriageError> {
        Self::new(
            seeds
                .iter()
                .map(|seed| Agent {
                    id: seed.id.clone(),
                    skills: seed
                        .skills
                        .iter()
                        .map(|skill| Category::from(skill.as_str()))
                        .collect(),
                    load: seed.load,
                })
                .collect(),
        )
    }

    /// Pick the least-loaded agent able to handle `category` and charge one
    /// unit of load to it. When nobody lists the skill, the whole roster is
    /// the candidate set. Ties go to the earliest agent in roster order.
    pub fn assign(&mut self, category: &Category) -> Result<String, TriageError> {
        let skilled: Vec<usize> = self
            .agents
            .iter()
            .enumerate()
            .filter(|(_, agent)| agent.has_skill(category))
            .map(|(idx, _)| idx)
            .collect();

        let candidates = if skilled.is_empty() {
            (0..self.agents.len()).collect()
        } else {
            skilled
        };

        // min_by_key returns the first minimum, preserving roster order
        let chosen = candidates
            .into_iter()
            .min_by_key(|&idx| self.agents[idx].load)
            .ok_or(TriageError::EmptyRegistry)?;

        let agent = &mut self.agents[chosen];
        agent.load += 1;
        Ok(agent.id.clone())
    }

    pub fn list(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_registry() -> AgentRegistry {
        AgentRegistry::new(vec![
            Agent {
                id: "Alice".to_string(),
                skills: vec![Category::Password, Category::Hardware],
                load: 2,
            },
            Agent {
                id: "Bob".to_string(),
                skills: vec![Category::Network, Category::Incident],
                load: 1,
            },
            Agent {
                id: "Cara".to_string(),
                skills: vec![Category::ServiceRequest, Category::Hardware],
                load: 0,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(matches!(
            AgentRegistry::new(vec![]),
            Err(TriageError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_skilled_agent_preferred() {
        let mut registry = demo_registry();
        // Bob is the only Network agent despite Cara having less load
        assert_eq!(registry.assign(&Category::Network).unwrap(), "Bob");
    }

    #[test]
    fn test_least_loaded_among_skilled() {
        let mut registry = demo_registry();
        // Hardware: Alice (load 2) vs Cara (load 0) -> Cara
        assert_eq!(registry.assign(&Category::Hardware).unwrap(), "Cara");
    }

    #[test]
    fn test_fallback_to_full_roster() {
        let mut registry = demo_registry();
        // Nobody lists Billing; global minimum load is Cara (0)
        let billing = Category::Other("Billing".to_string());
        assert_eq!(registry.assign(&billing).unwrap(), "Cara");
    }

    #[test]
    fn test_tie_broken_by_roster_order() {
        let mut registry = AgentRegistry::new(vec![
            Agent {
                id: "First".to_string(),
                skills: vec![Category::Network],
                load: 3,
            },
            Agent {
                id: "Second".to_string(),
                skills: vec![Category::Network],
                load: 3,
            },
        ])
        .unwrap();
        assert_eq!(registry.assign(&Category::Network).unwrap(), "First");
        // First now carries load 4, so the next one goes to Second
        assert_eq!(registry.assign(&Category::Network).unwrap(), "Second");
    }

    #[test]
    fn test_assignment_increments_load_by_one() {
        let mut registry = demo_registry();
        let before: u32 = registry.list().iter().map(|a| a.load).sum();
        registry.assign(&Category::Password).unwrap();
        let after: u32 = registry.list().iter().map(|a| a.load).sum();
        assert_eq!(after, before + 1);

        let alice = registry.list().iter().find(|a| a.id == "Alice").unwrap();
        assert_eq!(alice.load, 3);
    }

    #[test]
    fn test_from_seeds_maps_skills() {
        use crate::config::AgentSeed;

        let registry = AgentRegistry::from_seeds(&[AgentSeed {
            id: "Dan".to_string(),
            skills: vec!["Network".to_string(), "Billing".to_string()],
            load: 0,
        }])
        .unwrap();

        let dan = &registry.list()[0];
        assert!(dan.has_skill(&Category::Network));
        assert!(dan.has_skill(&Category::Other("Billing".to_string())));
    }
}
