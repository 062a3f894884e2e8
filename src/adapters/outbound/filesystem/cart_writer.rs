use crate::build_configuration::domain::Slot;
use crate::ports::outbound::{CartGateway, CartLine};
use crate::shared::error::ConfiguratorError;
use crate::shared::security::validate_output_target;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Cart document written by [`JsonCartWriter`]
#[derive(Debug, Serialize, Deserialize)]
pub struct CartDocument {
    pub order_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<CartDocumentLine>,
    pub total_price: Decimal,
}

/// Single cart entry as stored on disk
#[derive(Debug, Serialize, Deserialize)]
pub struct CartDocumentLine {
    pub slot: Slot,
    pub component_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl From<&CartLine> for CartDocumentLine {
    fn from(line: &CartLine) -> Self {
        Self {
            slot: line.slot,
            component_id: line.component.id().to_string(),
            name: line.component.name().to_string(),
            unit_price: line.component.price(),
            quantity: line.quantity,
        }
    }
}

/// JsonCartWriter adapter handing committed builds to a JSON cart file
///
/// Stands in for the checkout backend: each commit writes a fresh cart
/// document with its own order id.
pub struct JsonCartWriter {
    output_path: PathBuf,
}

impl JsonCartWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    fn build_document(lines: &[CartLine]) -> CartDocument {
        let lines: Vec<CartDocumentLine> = lines.iter().map(CartDocumentLine::from).collect();
        let total_price = lines
            .iter()
            .map(|line| line.unit_price * Decimal::from(line.quantity))
            .sum();

        CartDocument {
            order_id: Uuid::new_v4(),
            created_at: Utc::now(),
            lines,
            total_price,
        }
    }
}

impl CartGateway for JsonCartWriter {
    fn commit(&self, lines: &[CartLine]) -> Result<()> {
        validate_output_target(&self.output_path)?;

        let document = Self::build_document(lines);
        let json = serde_json::to_string_pretty(&document)?;

        fs::write(&self.output_path, json).map_err(|e| ConfiguratorError::CartWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}
