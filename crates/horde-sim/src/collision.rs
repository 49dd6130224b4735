//! Collision registry: tracks collidable entities and finds circle contacts.
//!
//! Stored in `SimulationEngine`, not as ECS components. Registration is an
//! explicit step paired with entity removal. Positions are read from the
//! world each pass; the registry only knows kind, radius and whether the
//! entity wants per-entity contact notifications.
//!
//! Callbacks are modelled as an ordered list of [`Contact`]s returned from
//! [`CollisionRegistry::tick`]. For each touching pair that has a rule, the
//! pair-level contact (if the rule has a handler) comes first, then one
//! per-entity contact for each side that asked to be notified.

use std::collections::HashMap;

use hecs::{Entity, World};

use horde_core::enums::{CollidableKind, CollisionGroup};
use horde_core::types::Position;

/// What the engine does when a pair rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactHandler {
    /// Enemy body touches the player: contact damage.
    EnemyTouchesPlayer,
    /// Player walks over a pickup: collect it.
    PlayerCollectsPickup,
}

/// Registration data for one collidable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub kind: CollidableKind,
    /// Zero (or less) never matches anything.
    pub radius: f32,
    /// Emit a per-entity contact with this entity as subject.
    pub notify: bool,
}

impl Collider {
    pub fn new(kind: CollidableKind, radius: f32) -> Self {
        Self {
            kind,
            radius,
            notify: false,
        }
    }

    pub fn notifying(mut self) -> Self {
        self.notify = true;
        self
    }

    pub fn group(&self) -> CollisionGroup {
        self.kind.group()
    }
}

/// One side of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactSide {
    pub entity: Entity,
    pub kind: CollidableKind,
}

/// A contact found during a registry pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Pair-level contact. `first` is in the rule's first group.
    Pair {
        handler: ContactHandler,
        first: ContactSide,
        second: ContactSide,
    },
    /// Per-entity contact, delivered to `subject` with the other entity as argument.
    Entity {
        subject: ContactSide,
        other: ContactSide,
    },
}

/// A symmetric rule allowing two groups to test for contact.
#[derive(Debug, Clone, Copy)]
struct PairRule {
    /// Group that appears as `first` in pair contacts.
    first: CollisionGroup,
    handler: Option<ContactHandler>,
}

/// The collision registry.
#[derive(Debug, Default)]
pub struct CollisionRegistry {
    /// Registration order is the pair-scan order.
    entries: Vec<(Entity, Collider)>,
    rules: HashMap<(CollisionGroup, CollisionGroup), PairRule>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity. Registering the same entity twice is a programmer
    /// error: it asserts in debug builds and is ignored in release.
    pub fn register(&mut self, entity: Entity, collider: Collider) {
        let already = self.contains(entity);
        debug_assert!(!already, "entity {entity:?} registered twice");
        if already {
            return;
        }
        self.entries.push((entity, collider));
    }

    /// Remove an entity. Returns false if it was not registered.
    pub fn unregister(&mut self, entity: Entity) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(e, _)| *e != entity);
        self.entries.len() != before
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entries.iter().any(|(e, _)| *e == entity)
    }

    pub fn collider(&self, entity: Entity) -> Option<&Collider> {
        self.entries
            .iter()
            .find(|(e, _)| *e == entity)
            .map(|(_, c)| c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every registration (rules are kept).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Allow `a` and `b` to collide. (a, b) and (b, a) are the same rule;
    /// setting it again replaces the handler.
    pub fn set_pair_rule(
        &mut self,
        a: CollisionGroup,
        b: CollisionGroup,
        handler: Option<ContactHandler>,
    ) {
        self.rules.insert(rule_key(a, b), PairRule { first: a, handler });
    }

    pub fn has_pair_rule(&self, a: CollisionGroup, b: CollisionGroup) -> bool {
        self.rules.contains_key(&rule_key(a, b))
    }

    /// Whether two registered entities are currently touching under a pair rule.
    pub fn in_contact(&self, world: &World, a: Entity, b: Entity) -> bool {
        let (Some(ca), Some(cb)) = (self.collider(a), self.collider(b)) else {
            return false;
        };
        if !self.has_pair_rule(ca.group(), cb.group()) {
            return false;
        }
        let (Some(pa), Some(pb)) = (position_of(world, a), position_of(world, b)) else {
            return false;
        };
        circles_touch(&pa, ca.radius, &pb, cb.radius)
    }

    /// Pairwise pass over all registered entities. At most one set of
    /// contacts per touching pair per call.
    pub fn tick(&self, world: &World) -> Vec<Contact> {
        let mut contacts = Vec::new();

        // Resolve positions once; entities without a position never match.
        let resolved: Vec<(Entity, Collider, Option<Position>)> = self
            .entries
            .iter()
            .map(|&(e, c)| (e, c, position_of(world, e)))
            .collect();

        for i in 0..resolved.len() {
            let (ea, ca, Some(pa)) = resolved[i] else {
                continue;
            };
            if ca.radius <= 0.0 {
                continue;
            }
            for &(eb, cb, pb) in &resolved[i + 1..] {
                let Some(pb) = pb else {
                    continue;
                };
                if cb.radius <= 0.0 {
                    continue;
                }
                let Some(rule) = self.rules.get(&rule_key(ca.group(), cb.group())) else {
                    continue;
                };
                if !circles_touch(&pa, ca.radius, &pb, cb.radius) {
                    continue;
                }

                let side_a = ContactSide {
                    entity: ea,
                    kind: ca.kind,
                };
                let side_b = ContactSide {
                    entity: eb,
                    kind: cb.kind,
                };

                if let Some(handler) = rule.handler {
                    let (first, second) = if ca.group() == rule.first {
                        (side_a, side_b)
                    } else {
                        (side_b, side_a)
                    };
                    contacts.push(Contact::Pair {
                        handler,
                        first,
                        second,
                    });
                }
                if ca.notify {
                    contacts.push(Contact::Entity {
                        subject: side_a,
                        other: side_b,
                    });
                }
                if cb.notify {
                    contacts.push(Contact::Entity {
                        subject: side_b,
                        other: side_a,
                    });
                }
            }
        }

        contacts
    }
}

/// Circle-circle test. Strictly less than the radius sum; zero radii never touch.
pub fn circles_touch(a: &Position, ra: f32, b: &Position, rb: f32) -> bool {
    if ra <= 0.0 || rb <= 0.0 {
        return false;
    }
    a.distance_to(b) < ra + rb
}

fn rule_key(a: CollisionGroup, b: CollisionGroup) -> (CollisionGroup, CollisionGroup) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn position_of(world: &World, entity: Entity) -> Option<Position> {
    world.get::<&Position>(entity).ok().map(|p| *p)
}
