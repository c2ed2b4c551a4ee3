//! In-memory drawing document: layers, text styles, and entities.
//!
//! The document is populated once per conversion run by the drawing
//! builder and then serialized by the DXF writer. Nothing here knows
//! about group codes.

/// A named layer controlling the color of entities assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub name: String,
    pub color: i32,
}

/// A named text style backed by a font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub name: String,
    pub font: String,
}

/// A drawing entity. Each entity belongs to exactly one layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Point {
        layer: &'static str,
        x: f64,
        y: f64,
        z: f64,
    },
    Text {
        layer: &'static str,
        style: &'static str,
        height: f64,
        x: f64,
        y: f64,
        value: String,
    },
}

impl Entity {
    /// Name of the layer this entity belongs to.
    pub fn layer(&self) -> &str {
        match self {
            Entity::Point { layer, .. } => layer,
            Entity::Text { layer, .. } => layer,
        }
    }
}

/// The output drawing document, built once per run.
#[derive(Debug, Default)]
pub struct Drawing {
    pub layers: Vec<Layer>,
    pub styles: Vec<TextStyle>,
    pub entities: Vec<Entity>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a layer. An existing layer of the same name has its color
    /// overwritten instead of producing an error.
    pub fn upsert_layer(&mut self, name: &str, color: i32) {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.name == name) {
            layer.color = color;
        } else {
            self.layers.push(Layer {
                name: name.to_string(),
                color,
            });
        }
    }

    /// Register a text style unless one of the same name already exists.
    pub fn ensure_style(&mut self, name: &str, font: &str) {
        if self.styles.iter().any(|s| s.name == name) {
            return;
        }
        self.styles.push(TextStyle {
            name: name.to_string(),
            font: font.to_string(),
        });
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Count entities on a given layer.
    pub fn count_on_layer(&self, layer: &str) -> usize {
        self.entities.iter().filter(|e| e.layer() == layer).count()
    }
}
