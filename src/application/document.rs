// Display surface the panels render into

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Weather,
    Crime,
    Transport,
    Events,
}

impl Region {
    pub fn element_id(self) -> &'static str {
        match self {
            Region::Weather => "weatherInfo",
            Region::Crime => "crime",
            Region::Transport => "transport",
            Region::Events => "events",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    City,
    BusLabel,
}

/// Whatever a region shows; each render replaces the previous content entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionContent {
    Text(String),
    Block(Vec<String>),
    List(Vec<String>),
}

pub trait Document: Send + Sync {
    fn render(&self, region: Region, content: RegionContent);

    /// `None` when the input control is not present.
    fn input_value(&self, field: InputField) -> Option<String>;

    fn set_input_value(&self, field: InputField, value: &str);
}
