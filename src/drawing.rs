//! The result of reading a drawing

use crate::entities::{find_contours, Contour, Entity};
use crate::notification::NotificationCollection;
use crate::types::BoundingBox2D;
use ahash::RandomState;
use indexmap::IndexMap;

/// Entities of one ENTITIES section, ordered by index, and the diagnostics
/// collected while reading them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    entities: Vec<Entity>,
    notifications: NotificationCollection,
}

impl Drawing {
    pub fn new(entities: Vec<Entity>, notifications: NotificationCollection) -> Self {
        Self {
            entities,
            notifications,
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Non-fatal conditions noticed while reading.
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }

    /// Entities grouped by layer name, layers in order of first appearance.
    pub fn layers(&self) -> IndexMap<&str, Vec<&Entity>, RandomState> {
        let mut layers: IndexMap<&str, Vec<&Entity>, RandomState> = IndexMap::default();
        for entity in &self.entities {
            layers.entry(entity.layer()).or_default().push(entity);
        }
        layers
    }

    /// Extents of all entities, `None` for an empty drawing.
    pub fn bounding_box(&self) -> Option<BoundingBox2D> {
        let boxes: Vec<BoundingBox2D> = self.entities.iter().map(Entity::bounding_box).collect();
        BoundingBox2D::merge_all(&boxes)
    }

    /// Chain the drawing's lines and arcs into contours.
    ///
    /// Returns the contours and the entities that did not join any.
    pub fn contours(&self, tolerance: f64) -> (Vec<Contour>, Vec<Entity>) {
        find_contours(self.entities.clone(), tolerance)
    }
}
