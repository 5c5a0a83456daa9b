//! Built-in rating tables. Stat names match the column names of the stats table.

pub const CENTRE_FORWARD_STATS: &[&str] = &[
    "rating", "goals", "bigChancesCreated", "bigChancesMissed", "assists", "expectedAssists", "accuratePasses",
    "inaccuratePasses", "keyPasses", "successfulDribbles", "interceptions", "yellowCards", "redCards",
    "totalShots", "shotsOnTarget", "totalDuelsWon", "penaltyWon", "penaltyConceded", "goalsFromInsideTheBox",
    "goalsFromOutsideTheBox", "dispossessed", "possessionLost", "possessionWonAttThird", "touches", "wasFouled",
    "fouls", "ownGoals", "offsides", "passToAssist", "tacklesWon", "totwAppearances", "expectedGoals",
    "ballRecovery", "appearances"
];

pub const LEFT_WING_STATS: &[&str] = &[
    "rating", "goals", "bigChancesCreated", "bigChancesMissed", "assists", "expectedAssists", "accuratePasses",
    "inaccuratePasses", "keyPasses", "successfulDribbles", "tackles", "interceptions", "yellowCards", "redCards",
    "accurateCrosses", "totalShots", "shotsOnTarget", "totalDuelsWon", "penaltyWon", "penaltyConceded",
    "accurateLongBalls", "errorLeadToGoal", "dispossessed", "possessionLost", "possessionWonAttThird", "touches",
    "wasFouled", "fouls", "ownGoals", "dribbledPast", "offsides", "passToAssist", "duelLost", "tacklesWon",
    "totwAppearances", "expectedGoals", "ballRecovery", "appearances"
];

pub const RIGHT_WING_STATS: &[&str] = &[
    "rating", "goals", "bigChancesCreated", "bigChancesMissed", "assists", "expectedAssists", "accuratePasses",
    "inaccuratePasses", "keyPasses", "successfulDribbles", "tackles", "interceptions", "yellowCards", "redCards",
    "accurateCrosses", "totalShots", "shotsOnTarget", "totalDuelsWon", "penaltyWon", "penaltyConceded",
    "accurateLongBalls", "errorLeadToGoal", "dispossessed", "possessionLost", "possessionWonAttThird", "touches",
    "wasFouled", "fouls", "ownGoals", "dribbledPast", "offsides", "passToAssist", "duelLost", "tacklesWon",
    "totwAppearances", "expectedGoals", "ballRecovery", "appearances"
];

pub const ATTACKING_MIDFIELD_STATS: &[&str] = &[
    "rating", "goals", "bigChancesCreated", "bigChancesMissed", "assists", "expectedAssists", "accuratePasses",
    "inaccuratePasses", "accurateOppositionHalfPasses", "accurateFinalThirdPasses", "keyPasses",
    "successfulDribbles", "tackles", "interceptions", "yellowCards", "redCards", "totalShots", "shotsOnTarget",
    "totalDuelsWon", "penaltyWon", "accurateLongBalls", "errorLeadToGoal", "dispossessed", "possessionLost",
    "possessionWonAttThird", "touches", "wasFouled", "fouls", "ownGoals", "dribbledPast", "offsides",
    "passToAssist", "duelLost", "tacklesWon", "totwAppearances", "expectedGoals", "ballRecovery", "appearances"
];

pub const CENTRAL_MIDFIELD_STATS: &[&str] = &[
    "rating", "goals", "bigChancesCreated", "bigChancesMissed", "assists", "expectedAssists", "accuratePasses",
    "inaccuratePasses", "accurateOwnHalfPasses", "accurateOppositionHalfPasses", "accurateFinalThirdPasses",
    "keyPasses", "successfulDribbles", "tackles", "interceptions", "yellowCards", "redCards", "totalShots",
    "shotsOnTarget", "totalDuelsWon", "penaltyWon", "penaltyConceded", "accurateLongBalls", "clearances",
    "errorLeadToGoal", "errorLeadToShot", "dispossessed", "possessionLost", "possessionWonAttThird", "touches",
    "wasFouled", "fouls", "ownGoals", "dribbledPast", "offsides", "blockedShots", "passToAssist", "cleanSheet",
    "duelLost", "goalsConceded", "tacklesWon", "totwAppearances", "expectedGoals", "ballRecovery", "appearances"
];

pub const DEFENSIVE_MIDFIELD_STATS: &[&str] = &[
    "rating", "goals", "bigChancesCreated", "bigChancesMissed", "assists", "expectedAssists", "accuratePasses",
    "inaccuratePasses", "accurateOwnHalfPasses", "accurateOppositionHalfPasses", "accurateFinalThirdPasses",
    "keyPasses", "successfulDribbles", "tackles", "interceptions", "yellowCards", "redCards", "totalShots",
    "shotsOnTarget", "totalDuelsWon", "penaltyWon", "accurateLongBalls", "clearances", "errorLeadToGoal",
    "errorLeadToShot", "dispossessed", "possessionLost", "possessionWonAttThird", "touches", "wasFouled", "fouls",
    "ownGoals", "dribbledPast", "offsides", "blockedShots", "passToAssist", "cleanSheet", "duelLost",
    "goalsConceded", "tacklesWon", "totwAppearances", "expectedGoals", "ballRecovery", "appearances"
];

pub const RIGHT_BACK_STATS: &[&str] = &[
    "rating", "goals", "bigChancesCreated", "bigChancesMissed", "assists", "expectedAssists", "accuratePasses",
    "inaccuratePasses", "accurateOwnHalfPasses", "accurateOppositionHalfPasses", "accurateFinalThirdPasses",
    "keyPasses", "successfulDribbles", "tackles", "interceptions", "yellowCards", "redCards", "accurateCrosses",
    "totalShots", "shotsOnTarget", "groundDuelsWon", "aerialDuelsWon", "penaltyWon", "penaltyConceded",
    "accurateLongBalls", "clearances", "errorLeadToGoal", "errorLeadToShot", "dispossessed", "possessionLost",
    "possessionWonAttThird", "touches", "wasFouled", "fouls", "ownGoals", "dribbledPast", "offsides",
    "blockedShots", "passToAssist", "cleanSheet", "duelLost", "aerialLost", "goalsConceded", "tacklesWon",
    "totwAppearances", "expectedGoals", "ballRecovery", "appearances"
];

pub const LEFT_BACK_STATS: &[&str] = &[
    "rating", "goals", "bigChancesCreated", "bigChancesMissed", "assists", "expectedAssists", "accuratePasses",
    "inaccuratePasses", "accurateOwnHalfPasses", "accurateOppositionHalfPasses", "accurateFinalThirdPasses",
    "keyPasses", "successfulDribbles", "tackles", "interceptions", "yellowCards", "redCards", "accurateCrosses",
    "totalShots", "shotsOnTarget", "groundDuelsWon", "aerialDuelsWon", "penaltyWon", "penaltyConceded",
    "accurateLongBalls", "clearances", "errorLeadToGoal", "errorLeadToShot", "dispossessed", "possessionLost",
    "possessionWonAttThird", "touches", "wasFouled", "fouls", "ownGoals", "dribbledPast", "offsides",
    "blockedShots", "passToAssist", "cleanSheet", "duelLost", "aerialLost", "goalsConceded", "tacklesWon",
    "totwAppearances", "expectedGoals", "ballRecovery", "appearances"
];

pub const CENTRE_BACK_STATS: &[&str] = &[
    "rating", "goals", "bigChancesCreated", "bigChancesMissed", "assists", "expectedAssists", "accuratePasses",
    "inaccuratePasses", "accurateOwnHalfPasses", "accurateOppositionHalfPasses", "keyPasses", "tackles",
    "interceptions", "yellowCards", "redCards", "groundDuelsWon", "aerialDuelsWon", "penaltyConceded",
    "accurateLongBalls", "clearances", "errorLeadToGoal", "errorLeadToShot", "dispossessed", "possessionLost",
    "wasFouled", "fouls", "ownGoals", "dribbledPast", "blockedShots", "passToAssist", "cleanSheet", "duelLost",
    "aerialLost", "goalsConceded", "tacklesWon", "totwAppearances", "expectedGoals", "ballRecovery", "appearances"
];

pub const GOALKEEPER_STATS: &[&str] = &[
    "rating", "accuratePasses", "inaccuratePasses", "yellowCards", "redCards", "groundDuelsWon", "aerialDuelsWon",
    "penaltyConceded", "accurateLongBalls", "clearances", "errorLeadToGoal", "errorLeadToShot", "dispossessed",
    "possessionLost", "wasFouled", "fouls", "ownGoals", "dribbledPast", "saves", "cleanSheet", "penaltySave",
    "savedShotsFromInsideTheBox", "savedShotsFromOutsideTheBox", "goalsConcededInsideTheBox",
    "goalsConcededOutsideTheBox", "punches", "successfulRunsOut", "highClaims", "crossesNotClaimed", "duelLost",
    "aerialLost", "goalsConceded", "totwAppearances", "ballRecovery", "appearances"
];

pub const CENTRE_FORWARD_WEIGHTS: &[(&str, f64)] = &[
    ("rating", 1.0), ("goals", 2.0), ("bigChancesCreated", 1.5), ("bigChancesMissed", -1.0), ("assists", 1.5),
    ("expectedAssists", 1.2), ("accuratePasses", 0.5), ("inaccuratePasses", -0.3), ("keyPasses", 1.0),
    ("successfulDribbles", 1.2), ("interceptions", 0.5), ("yellowCards", -1.0), ("redCards", -2.0),
    ("totalShots", 1.0), ("shotsOnTarget", 1.5), ("totalDuelsWon", 0.8), ("penaltyWon", 1.0),
    ("penaltyConceded", -1.5), ("goalsFromInsideTheBox", 1.5), ("goalsFromOutsideTheBox", 2.0),
    ("dispossessed", -0.5), ("possessionLost", -0.3), ("possessionWonAttThird", 1.0), ("touches", 0.3),
    ("wasFouled", 0.5), ("fouls", -0.2), ("ownGoals", -3.0), ("offsides", -0.5), ("passToAssist", 1.0),
    ("tacklesWon", 0.5), ("totwAppearances", 1.0), ("expectedGoals", 2.0), ("ballRecovery", 0.5),
    ("appearances", 0.3)
];

pub const LEFT_WING_WEIGHTS: &[(&str, f64)] = &[
    ("rating", 1.0), ("goals", 2.5), ("bigChancesCreated", 2.0), ("bigChancesMissed", -1.2), ("assists", 2.0),
    ("expectedAssists", 1.5), ("accuratePasses", 0.7), ("inaccuratePasses", -0.3), ("keyPasses", 1.8),
    ("successfulDribbles", 1.5), ("tackles", 0.6), ("interceptions", 0.6), ("yellowCards", -1.0),
    ("redCards", -2.0), ("accurateCrosses", 1.5), ("totalShots", 1.5), ("shotsOnTarget", 1.8),
    ("totalDuelsWon", 0.9), ("penaltyWon", 1.0), ("penaltyConceded", -1.5), ("accurateLongBalls", 0.5),
    ("errorLeadToGoal", -2.0), ("dispossessed", -0.8), ("possessionLost", -0.5), ("possessionWonAttThird", 1.2),
    ("touches", 0.4), ("wasFouled", 0.6), ("fouls", -0.3), ("ownGoals", -3.0), ("dribbledPast", -1.0),
    ("offsides", -0.5), ("passToAssist", 1.5), ("duelLost", -0.3), ("tacklesWon", 0.7), ("totwAppearances", 1.2),
    ("expectedGoals", 2.8), ("ballRecovery", 0.5), ("appearances", 0.3)
];

pub const RIGHT_WING_WEIGHTS: &[(&str, f64)] = &[
    ("rating", 1.0), ("goals", 2.5), ("bigChancesCreated", 2.0), ("bigChancesMissed", -1.2), ("assists", 2.0),
    ("expectedAssists", 1.5), ("accuratePasses", 0.7), ("inaccuratePasses", -0.3), ("keyPasses", 1.8),
    ("successfulDribbles", 1.5), ("tackles", 0.6), ("interceptions", 0.6), ("yellowCards", -1.0),
    ("redCards", -2.0), ("accurateCrosses", 1.5), ("totalShots", 1.5), ("shotsOnTarget", 1.8),
    ("totalDuelsWon", 0.9), ("penaltyWon", 1.0), ("penaltyConceded", -1.5), ("accurateLongBalls", 0.5),
    ("errorLeadToGoal", -2.0), ("dispossessed", -0.8), ("possessionLost", -0.5), ("possessionWonAttThird", 1.2),
    ("touches", 0.4), ("wasFouled", 0.6), ("fouls", -0.3), ("ownGoals", -3.0), ("dribbledPast", -1.0),
    ("offsides", -0.5), ("passToAssist", 1.5), ("duelLost", -0.3), ("tacklesWon", 0.7), ("totwAppearances", 1.2),
    ("expectedGoals", 2.8), ("ballRecovery", 0.5), ("appearances", 0.3)
];

pub const ATTACKING_MIDFIELD_WEIGHTS: &[(&str, f64)] = &[
    ("rating", 1.0), ("goals", 2.0), ("bigChancesCreated", 2.5), ("bigChancesMissed", -1.0), ("assists", 2.5),
    ("expectedAssists", 2.0), ("accuratePasses", 1.0), ("inaccuratePasses", -0.4),
    ("accurateOppositionHalfPasses", 1.2), ("accurateFinalThirdPasses", 1.5), ("keyPasses", 2.5),
    ("successfulDribbles", 1.8), ("tackles", 0.8), ("interceptions", 0.7), ("yellowCards", -1.0),
    ("redCards", -2.0), ("totalShots", 1.2), ("shotsOnTarget", 1.5), ("totalDuelsWon", 1.0), ("penaltyWon", 1.0),
    ("accurateLongBalls", 0.7), ("errorLeadToGoal", -2.0), ("dispossessed", -0.6), ("possessionLost", -0.4),
    ("possessionWonAttThird", 1.5), ("touches", 0.5), ("wasFouled", 0.6), ("fouls", -0.3), ("ownGoals", -3.0),
    ("dribbledPast", -1.0), ("offsides", -0.5), ("passToAssist", 2.0), ("duelLost", -0.3), ("tacklesWon", 0.8),
    ("totwAppearances", 1.5), ("expectedGoals", 2.5), ("ballRecovery", 0.5), ("appearances", 0.3)
];

pub const CENTRAL_MIDFIELD_WEIGHTS: &[(&str, f64)] = &[
    ("rating", 1.0), ("goals", 1.5), ("bigChancesCreated", 2.0), ("bigChancesMissed", -0.8), ("assists", 2.0),
    ("expectedAssists", 1.8), ("accuratePasses", 1.2), ("inaccuratePasses", -0.3), ("accurateOwnHalfPasses", 1.2),
    ("accurateOppositionHalfPasses", 1.5), ("accurateFinalThirdPasses", 1.8), ("keyPasses", 2.0),
    ("successfulDribbles", 1.0), ("tackles", 1.5), ("interceptions", 1.5), ("yellowCards", -1.0),
    ("redCards", -2.0), ("totalShots", 0.8), ("shotsOnTarget", 1.0), ("totalDuelsWon", 1.2), ("penaltyWon", 1.0),
    ("penaltyConceded", -1.5), ("accurateLongBalls", 1.2), ("clearances", 1.0), ("errorLeadToGoal", -2.0),
    ("errorLeadToShot", -1.5), ("dispossessed", -0.5), ("possessionLost", -0.3), ("possessionWonAttThird", 1.2),
    ("touches", 0.5), ("wasFouled", 0.7), ("fouls", -0.3), ("ownGoals", -3.0), ("dribbledPast", -1.0),
    ("offsides", -0.5), ("blockedShots", 0.5), ("passToAssist", 1.5), ("cleanSheet", 0.5), ("duelLost", -0.3),
    ("goalsConceded", -1.5), ("tacklesWon", 1.2), ("totwAppearances", 1.2), ("expectedGoals", 1.8),
    ("ballRecovery", 1.2), ("appearances", 0.3)
];

pub const DEFENSIVE_MIDFIELD_WEIGHTS: &[(&str, f64)] = &[
    ("rating", 1.0), ("goals", 1.2), ("bigChancesCreated", 1.8), ("bigChancesMissed", -0.8), ("assists", 1.5),
    ("expectedAssists", 1.5), ("accuratePasses", 1.5), ("inaccuratePasses", -0.5), ("accurateOwnHalfPasses", 1.5),
    ("accurateOppositionHalfPasses", 1.2), ("accurateFinalThirdPasses", 1.0), ("keyPasses", 1.8),
    ("successfulDribbles", 0.8), ("tackles", 2.0), ("interceptions", 2.0), ("yellowCards", -1.0),
    ("redCards", -2.0), ("totalShots", 0.6), ("shotsOnTarget", 0.8), ("totalDuelsWon", 1.5), ("penaltyWon", 0.5),
    ("accurateLongBalls", 1.2), ("clearances", 1.5), ("errorLeadToGoal", -2.5), ("errorLeadToShot", -1.8),
    ("dispossessed", -0.5), ("possessionLost", -0.5), ("possessionWonAttThird", 1.2), ("touches", 0.6),
    ("wasFouled", 0.6), ("fouls", -0.5), ("ownGoals", -3.0), ("dribbledPast", -1.0), ("offsides", -0.2),
    ("blockedShots", 0.7), ("passToAssist", 1.0), ("cleanSheet", 1.0), ("duelLost", -0.5), ("goalsConceded", -1.5),
    ("tacklesWon", 2.0), ("totwAppearances", 1.5), ("expectedGoals", 1.2), ("ballRecovery", 2.0),
    ("appearances", 0.3)
];

pub const RIGHT_BACK_WEIGHTS: &[(&str, f64)] = &[
    ("rating", 1.0), ("goals", 0.8), ("bigChancesCreated", 1.5), ("bigChancesMissed", -0.5), ("assists", 1.8),
    ("expectedAssists", 1.5), ("accuratePasses", 1.2), ("inaccuratePasses", -0.3), ("accurateOwnHalfPasses", 1.5),
    ("accurateOppositionHalfPasses", 1.2), ("accurateFinalThirdPasses", 1.5), ("keyPasses", 1.8),
    ("successfulDribbles", 1.0), ("tackles", 2.0), ("interceptions", 1.8), ("yellowCards", -1.0),
    ("redCards", -2.0), ("accurateCrosses", 1.5), ("totalShots", 0.8), ("shotsOnTarget", 0.8),
    ("groundDuelsWon", 1.5), ("aerialDuelsWon", 1.0), ("penaltyWon", 0.5), ("penaltyConceded", -1.5),
    ("accurateLongBalls", 1.0), ("clearances", 1.5), ("errorLeadToGoal", -2.5), ("errorLeadToShot", -1.8),
    ("dispossessed", -0.5), ("possessionLost", -0.3), ("possessionWonAttThird", 1.2), ("touches", 0.6),
    ("wasFouled", 0.6), ("fouls", -0.5), ("ownGoals", -3.0), ("dribbledPast", -1.5), ("offsides", -0.2),
    ("blockedShots", 1.0), ("passToAssist", 1.2), ("cleanSheet", 1.5), ("duelLost", -0.5), ("aerialLost", -0.3),
    ("goalsConceded", -1.5), ("tacklesWon", 2.0), ("totwAppearances", 1.5), ("expectedGoals", 0.8),
    ("ballRecovery", 1.8), ("appearances", 0.3)
];

pub const LEFT_BACK_WEIGHTS: &[(&str, f64)] = &[
    ("rating", 1.0), ("goals", 0.8), ("bigChancesCreated", 1.5), ("bigChancesMissed", -0.5), ("assists", 1.8),
    ("expectedAssists", 1.5), ("accuratePasses", 1.2), ("inaccuratePasses", -0.3), ("accurateOwnHalfPasses", 1.5),
    ("accurateOppositionHalfPasses", 1.2), ("accurateFinalThirdPasses", 1.5), ("keyPasses", 1.8),
    ("successfulDribbles", 1.0), ("tackles", 2.0), ("interceptions", 1.8), ("yellowCards", -1.0),
    ("redCards", -2.0), ("accurateCrosses", 1.5), ("totalShots", 0.8), ("shotsOnTarget", 0.8),
    ("groundDuelsWon", 1.5), ("aerialDuelsWon", 1.0), ("penaltyWon", 0.5), ("penaltyConceded", -1.5),
    ("accurateLongBalls", 1.0), ("clearances", 1.5), ("errorLeadToGoal", -2.5), ("errorLeadToShot", -1.8),
    ("dispossessed", -0.5), ("possessionLost", -0.3), ("possessionWonAttThird", 1.2), ("touches", 0.6),
    ("wasFouled", 0.6), ("fouls", -0.5), ("ownGoals", -3.0), ("dribbledPast", -1.5), ("offsides", -0.2),
    ("blockedShots", 1.0), ("passToAssist", 1.2), ("cleanSheet", 1.5), ("duelLost", -0.5), ("aerialLost", -0.3),
    ("goalsConceded", -1.5), ("tacklesWon", 2.0), ("totwAppearances", 1.5), ("expectedGoals", 0.8),
    ("ballRecovery", 1.8), ("appearances", 0.3)
];

pub const CENTRE_BACK_WEIGHTS: &[(&str, f64)] = &[
    ("rating", 1.0), ("goals", 0.5), ("bigChancesCreated", 0.5), ("bigChancesMissed", -0.2), ("assists", 0.8),
    ("expectedAssists", 0.8), ("accuratePasses", 1.5), ("inaccuratePasses", -0.3), ("accurateOwnHalfPasses", 2.0),
    ("accurateOppositionHalfPasses", 1.0), ("keyPasses", 0.5), ("tackles", 2.5), ("interceptions", 2.5),
    ("yellowCards", -1.0), ("redCards", -2.0), ("groundDuelsWon", 2.0), ("aerialDuelsWon", 2.5),
    ("penaltyConceded", -2.0), ("accurateLongBalls", 1.5), ("clearances", 2.5), ("errorLeadToGoal", -3.0),
    ("errorLeadToShot", -2.0), ("dispossessed", -0.5), ("possessionLost", -0.3), ("wasFouled", 0.5),
    ("fouls", -0.5), ("ownGoals", -3.5), ("dribbledPast", -2.0), ("blockedShots", 1.5), ("passToAssist", 0.8),
    ("cleanSheet", 2.5), ("duelLost", -0.5), ("aerialLost", -0.5), ("goalsConceded", -2.0), ("tacklesWon", 2.5),
    ("totwAppearances", 1.5), ("expectedGoals", 0.5), ("ballRecovery", 2.5), ("appearances", 0.3)
];

pub const GOALKEEPER_WEIGHTS: &[(&str, f64)] = &[
    ("rating", 3.0), ("accuratePasses", 1.0), ("inaccuratePasses", -0.3), ("yellowCards", -1.0),
    ("redCards", -2.0), ("groundDuelsWon", 1.0), ("aerialDuelsWon", 1.5), ("penaltyConceded", -2.0),
    ("accurateLongBalls", 1.0), ("clearances", 1.5), ("errorLeadToGoal", -3.0), ("errorLeadToShot", -1.5),
    ("dispossessed", -0.5), ("possessionLost", -0.2), ("wasFouled", 0.5), ("fouls", -0.5), ("ownGoals", -3.5),
    ("dribbledPast", -0.25), ("saves", 3.0), ("cleanSheet", 3.0), ("penaltySave", 2.5),
    ("savedShotsFromInsideTheBox", 2.0), ("savedShotsFromOutsideTheBox", 1.5), ("goalsConcededInsideTheBox", -1.2),
    ("goalsConcededOutsideTheBox", -1.5), ("punches", 1.0), ("successfulRunsOut", 1.2), ("highClaims", 1.5),
    ("crossesNotClaimed", -0.5), ("duelLost", -0.2), ("aerialLost", -0.2), ("goalsConceded", -1.5),
    ("totwAppearances", 1.5), ("ballRecovery", 1.5), ("appearances", 0.3)
];
