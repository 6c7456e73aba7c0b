mod agent_loop;

pub use agent_loop::{BANNER, FAREWELL, QaAgent, USAGE_HINT};
