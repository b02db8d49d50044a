use crate::template::DEFAULT_TEMPLATE;

pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 64;

#[derive(Clone, Debug)]
pub struct HandlerConfig {
    pub template: String,
    /// Longest causal chain `render` accepts before giving up, counting the outer error.
    /// Values below 1 are treated as 1.
    pub max_chain_depth: usize,
}

impl HandlerConfig {
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = depth.max(1);
        self
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_owned(),
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
        }
    }
}
