pub mod icon {
    pub const CHECK: &str = "✅";
    pub const ERROR: &str = "❌";
    pub const BELL: &str = "🔔";
    pub const TIMER: &str = "⏱️";
    pub const PARTY: &str = "🎉";
    pub const BRAIN: &str = "🧠";
}
