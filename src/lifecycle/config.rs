use crate::order_actor::OrderStatusPolicy;
use std::time::Duration;

/// Floor system settings.
///
/// # Environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | FLOOR_ACTOR_BUFFER | 32 | mailbox capacity per actor |
/// | FLOOR_CONNECTION_BUFFER | 64 | queued messages per display before it counts as slow |
/// | FLOOR_IDLE_TIMEOUT_SECS | 90 | displays silent for longer are dropped |
/// | FLOOR_SWEEP_INTERVAL_SECS | 30 | how often idle displays are swept |
/// | FLOOR_STRICT_ORDER_STATUS | false | only allow forward order status changes |
///
/// ```ignore
/// FLOOR_STRICT_ORDER_STATUS=true RUST_LOG=info cargo run
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorConfig {
    pub actor_buffer: usize,
    pub connection_buffer: usize,
    pub idle_timeout: Duration,
    pub sweep_interval: Duration,
    pub order_status_policy: OrderStatusPolicy,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            actor_buffer: 32,
            connection_buffer: 64,
            idle_timeout: Duration::from_secs(90),
            sweep_interval: Duration::from_secs(30),
            order_status_policy: OrderStatusPolicy::Permissive,
        }
    }
}

impl FloorConfig {
    /// Reads the environment, falling back to the defaults for unset or
    /// unparsable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        let strict = lookup("FLOOR_STRICT_ORDER_STATUS")
            .and_then(|v| v.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            actor_buffer: parsed("FLOOR_ACTOR_BUFFER")
                .map(|v| v.max(1) as usize)
                .unwrap_or(defaults.actor_buffer),
            connection_buffer: parsed("FLOOR_CONNECTION_BUFFER")
                .map(|v| v.max(1) as usize)
                .unwrap_or(defaults.connection_buffer),
            idle_timeout: parsed("FLOOR_IDLE_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.idle_timeout),
            sweep_interval: parsed("FLOOR_SWEEP_INTERVAL_SECS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.sweep_interval),
            order_status_policy: if strict {
                OrderStatusPolicy::Strict
            } else {
                OrderStatusPolicy::Permissive
            },
        }
    }

    pub fn with_policy(mut self, policy: OrderStatusPolicy) -> Self {
        self.order_status_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> FloorConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        FloorConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config(&[]), FloorConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("FLOOR_ACTOR_BUFFER", "8"),
            ("FLOOR_IDLE_TIMEOUT_SECS", "15"),
            ("FLOOR_STRICT_ORDER_STATUS", "true"),
        ]);
        assert_eq!(cfg.actor_buffer, 8);
        assert_eq!(cfg.idle_timeout, Duration::from_secs(15));
        assert_eq!(cfg.order_status_policy, OrderStatusPolicy::Strict);
        assert_eq!(cfg.connection_buffer, 64);
    }

    #[test]
    fn test_garbage_falls_back() {
        let cfg = config(&[
            ("FLOOR_CONNECTION_BUFFER", "lots"),
            ("FLOOR_SWEEP_INTERVAL_SECS", "0"),
            ("FLOOR_STRICT_ORDER_STATUS", "yes please"),
        ]);
        assert_eq!(cfg.connection_buffer, 64);
        assert_eq!(cfg.sweep_interval, Duration::from_secs(30));
        assert_eq!(cfg.order_status_policy, OrderStatusPolicy::Permissive);
    }
}
