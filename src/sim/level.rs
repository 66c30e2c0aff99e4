//! Static level catalog

/// A level descriptor (immutable configuration)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    /// Number of patrolling enemies
    pub enemies: usize,
    /// Multiplier on the base enemy step
    pub enemy_speed: f32,
    pub lives: u32,
    /// Seconds before the level is lost
    pub time_limit: u32,
    pub bg_color: &'static str,
    pub floor_color: &'static str,
    pub table_color: &'static str,
    pub emoji: &'static str,
}

/// The level catalog, in play order
pub const LEVELS: [Level; 15] = [
    Level {
        id: 1,
        name: "Level 1: Kitchen",
        location: "kitchen",
        enemies: 1,
        enemy_speed: 0.8,
        lives: 3,
        time_limit: 60,
        bg_color: "#FEF7CD",
        floor_color: "#8B5CF6",
        table_color: "#D97706",
        emoji: "🏠",
    },
    Level {
        id: 2,
        name: "Level 2: Garden",
        location: "garden",
        enemies: 2,
        enemy_speed: 1.2,
        lives: 3,
        time_limit: 45,
        bg_color: "#D4F1F4",
        floor_color: "#22C55E",
        table_color: "#A855F7",
        emoji: "🌳",
    },
    Level {
        id: 3,
        name: "Level 3: Pool",
        location: "pool",
        enemies: 3,
        enemy_speed: 1.5,
        lives: 2,
        time_limit: 40,
        bg_color: "#BAE6FD",
        floor_color: "#0EA5E9",
        table_color: "#FB923C",
        emoji: "🏊",
    },
    Level {
        id: 4,
        name: "Level 4: Living Room",
        location: "living",
        enemies: 3,
        enemy_speed: 1.8,
        lives: 2,
        time_limit: 35,
        bg_color: "#FED7AA",
        floor_color: "#7C3AED",
        table_color: "#DC2626",
        emoji: "🛋️",
    },
    Level {
        id: 5,
        name: "Level 5: Basement",
        location: "basement",
        enemies: 4,
        enemy_speed: 2.0,
        lives: 2,
        time_limit: 30,
        bg_color: "#A3A3A3",
        floor_color: "#1F2937",
        table_color: "#92400E",
        emoji: "🕯️",
    },
    Level {
        id: 6,
        name: "Level 6: Veranda",
        location: "veranda",
        enemies: 4,
        enemy_speed: 2.2,
        lives: 2,
        time_limit: 28,
        bg_color: "#FDE68A",
        floor_color: "#F59E0B",
        table_color: "#14B8A6",
        emoji: "🌺",
    },
    Level {
        id: 7,
        name: "Level 7: Forest",
        location: "forest",
        enemies: 5,
        enemy_speed: 2.4,
        lives: 2,
        time_limit: 26,
        bg_color: "#86EFAC",
        floor_color: "#16A34A",
        table_color: "#78350F",
        emoji: "🌲",
    },
    Level {
        id: 8,
        name: "Level 8: Beach",
        location: "beach",
        enemies: 5,
        enemy_speed: 2.6,
        lives: 2,
        time_limit: 24,
        bg_color: "#FDE047",
        floor_color: "#FACC15",
        table_color: "#0891B2",
        emoji: "🏖️",
    },
    Level {
        id: 9,
        name: "Level 9: Cave",
        location: "cave",
        enemies: 6,
        enemy_speed: 2.8,
        lives: 1,
        time_limit: 22,
        bg_color: "#64748B",
        floor_color: "#334155",
        table_color: "#7C2D12",
        emoji: "⛰️",
    },
    Level {
        id: 10,
        name: "Level 10: Rooftop",
        location: "roof",
        enemies: 6,
        enemy_speed: 3.0,
        lives: 1,
        time_limit: 20,
        bg_color: "#C7D2FE",
        floor_color: "#6366F1",
        table_color: "#DC2626",
        emoji: "🌃",
    },
    Level {
        id: 11,
        name: "Level 11: Attic",
        location: "attic",
        enemies: 7,
        enemy_speed: 3.2,
        lives: 1,
        time_limit: 18,
        bg_color: "#D1D5DB",
        floor_color: "#6B7280",
        table_color: "#B91C1C",
        emoji: "📦",
    },
    Level {
        id: 12,
        name: "Level 12: Park",
        location: "park",
        enemies: 7,
        enemy_speed: 3.4,
        lives: 1,
        time_limit: 17,
        bg_color: "#BBF7D0",
        floor_color: "#4ADE80",
        table_color: "#F59E0B",
        emoji: "🎡",
    },
    Level {
        id: 13,
        name: "Level 13: Bridge",
        location: "bridge",
        enemies: 8,
        enemy_speed: 3.6,
        lives: 1,
        time_limit: 16,
        bg_color: "#93C5FD",
        floor_color: "#3B82F6",
        table_color: "#EA580C",
        emoji: "🌉",
    },
    Level {
        id: 14,
        name: "Level 14: Factory",
        location: "factory",
        enemies: 8,
        enemy_speed: 3.8,
        lives: 1,
        time_limit: 15,
        bg_color: "#9CA3AF",
        floor_color: "#4B5563",
        table_color: "#F97316",
        emoji: "🏭",
    },
    Level {
        id: 15,
        name: "Level 15: Volcano",
        location: "volcano",
        enemies: 10,
        enemy_speed: 4.0,
        lives: 1,
        time_limit: 15,
        bg_color: "#FCA5A5",
        floor_color: "#DC2626",
        table_color: "#000000",
        emoji: "🌋",
    },
];

/// Look up a level by catalog index
pub fn level(index: usize) -> Option<&'static Level> {
    LEVELS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        for (i, level) in LEVELS.iter().enumerate() {
            assert_eq!(level.id as usize, i + 1);
        }
    }

    #[test]
    fn test_difficulty_never_eases() {
        for pair in LEVELS.windows(2) {
            assert!(pair[1].enemies >= pair[0].enemies);
            assert!(pair[1].enemy_speed > pair[0].enemy_speed);
            assert!(pair[1].lives <= pair[0].lives);
            assert!(pair[1].time_limit <= pair[0].time_limit);
        }
    }

    #[test]
    fn test_every_level_is_winnable_in_principle() {
        for level in &LEVELS {
            assert!(level.lives > 0);
            assert!(level.time_limit > 0);
            assert!(level.enemies > 0);
        }
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert!(level(0).is_some());
        assert!(level(LEVELS.len()).is_none());
    }
}
