/// Runtime configuration
#[derive(Debug, Clone, Default)]
pub struct RuntimeConf {
    /// Maximum number of items a native function may put in a single list
    ///
    /// Unlimited when `None`
    pub max_list_len: Option<usize>,
}
