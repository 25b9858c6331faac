// Console document - Keeps the state of each region and echoes updates to stdout
use crate::application::document::{Document, InputField, Region, RegionContent};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct ConsoleDocument {
    regions: Mutex<HashMap<Region, RegionContent>>,
    inputs: Mutex<HashMap<InputField, String>>,
    echo: bool,
}

impl ConsoleDocument {
    pub fn new() -> Self {
        Self {
            echo: true,
            ..Default::default()
        }
    }

    /// Same bookkeeping, nothing printed.
    pub fn quiet() -> Self {
        Self::default()
    }

    pub fn content(&self, region: Region) -> Option<RegionContent> {
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&region)
            .cloned()
    }
}

impl Document for ConsoleDocument {
    fn render(&self, region: Region, content: RegionContent) {
        if self.echo {
            println!("{}", format_region(region, &content));
        }
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(region, content);
    }

    fn input_value(&self, field: InputField) -> Option<String> {
        // Inputs always exist on the console; an untouched one reads as empty.
        Some(
            self.inputs
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .get(&field)
                .cloned()
                .unwrap_or_default(),
        )
    }

    fn set_input_value(&self, field: InputField, value: &str) {
        self.inputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(field, value.to_string());
    }
}

pub fn format_region(region: Region, content: &RegionContent) -> String {
    let mut out = format!("[{}]", region.element_id());
    match content {
        RegionContent::Text(text) => {
            out.push(' ');
            out.push_str(text);
        }
        RegionContent::Block(lines) => {
            for line in lines {
                out.push_str("\n  ");
                out.push_str(line);
            }
        }
        RegionContent::List(items) if items.is_empty() => out.push_str(" (empty)"),
        RegionContent::List(items) => {
            for item in items {
                for (i, line) in item.lines().enumerate() {
                    out.push_str(if i == 0 { "\n  - " } else { "\n    " });
                    out.push_str(line);
                }
            }
        }
    }
    out
}
