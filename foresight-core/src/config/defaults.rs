// Single source of truth for all default values.

// --- Consistency ---
pub const DEFAULT_POINTS_PER_DEVIATION: f64 = 25.0;
pub const DEFAULT_NEUTRAL_CONSISTENCY: f64 = 50.0;
pub const DEFAULT_OUTLIER_DEVIATION: f64 = 1.5;

// --- Timeliness ---
pub const DEFAULT_RESPONSE_GRACE_HOURS: f64 = 24.0;
pub const DEFAULT_LATE_RESPONSE_POINTS_PER_HOUR: f64 = 2.0;
pub const DEFAULT_MAX_LATE_RESPONSE_PENALTY: f64 = 30.0;
pub const DEFAULT_COMPLETION_GRACE_HOURS: f64 = 72.0;
pub const DEFAULT_SLOW_COMPLETION_POINTS_PER_HOUR: f64 = 0.5;
pub const DEFAULT_MAX_SLOW_COMPLETION_PENALTY: f64 = 25.0;
pub const DEFAULT_FAST_RESPONSE_HOURS: f64 = 2.0;
pub const DEFAULT_FAST_RESPONSE_BONUS: f64 = 10.0;
pub const DEFAULT_FAST_VOTE_SECS: f64 = 30.0;
pub const DEFAULT_FAST_VOTE_BONUS: f64 = 5.0;

// --- Participation weights (sum 100) ---
pub const DEFAULT_ACCEPTANCE_WEIGHT: u32 = 25;
pub const DEFAULT_COMPLETION_WEIGHT: u32 = 35;
pub const DEFAULT_ON_TIME_WEIGHT: u32 = 25;
pub const DEFAULT_RESPONSIVENESS_WEIGHT: u32 = 15;

// --- Reliability weights (sum 100) ---
pub const DEFAULT_CONSISTENCY_WEIGHT: u32 = 30;
pub const DEFAULT_TIMELINESS_WEIGHT: u32 = 25;
pub const DEFAULT_PARTICIPATION_WEIGHT: u32 = 20;
pub const DEFAULT_QUALITY_WEIGHT: u32 = 15;
pub const DEFAULT_COMMUNICATION_WEIGHT: u32 = 10;

// --- Reliability tiers (lower bounds) ---
pub const DEFAULT_TIER_POOR: f64 = 40.0;
pub const DEFAULT_TIER_AVERAGE: f64 = 60.0;
pub const DEFAULT_TIER_GOOD: f64 = 75.0;
pub const DEFAULT_TIER_EXCELLENT: f64 = 90.0;

// --- Invitation priority (lower bounds) ---
pub const DEFAULT_PRIORITY_LOW: f64 = 40.0;
pub const DEFAULT_PRIORITY_MEDIUM: f64 = 60.0;
pub const DEFAULT_PRIORITY_HIGH: f64 = 80.0;

// --- Badges ---
pub const DEFAULT_CONSISTENCY_BADGES: [f64; 4] = [70.0, 80.0, 90.0, 95.0];
pub const DEFAULT_SPEED_BADGE_HOURS: [f64; 4] = [48.0, 24.0, 12.0, 4.0];
pub const DEFAULT_PARTICIPATION_BADGES: [f64; 4] = [5.0, 10.0, 25.0, 50.0];

// --- Trends ---
pub const DEFAULT_TREND_WINDOW: usize = 5;

// --- Files & env ---
pub const DEFAULT_CONFIG_FILENAME: &str = "foresight.toml";
pub const ENV_PREFIX: &str = "FORESIGHT_";
