//! End-to-end race tests.
//!
//! These drive the public API the way the binary does and check the
//! documented scoring scenarios.

use kart_race::{
    declare_winner, resolve_round, BlockType, Competitor, ConsoleReporter, Matchup, NullObserver,
    Pacing, Race, RaceConfig, RaceObserver, RaceRecord, RaceResult, RaceRng, RoundEngine,
    RoundOutcome, Roster, ScoreChange, Side, ROUNDS,
};

/// Observer that logs every hook in order.
#[derive(Default)]
struct EventLog {
    events: Vec<String>,
}

impl RaceObserver for EventLog {
    fn on_lineup(&mut self, _matchup: &Matchup) -> kart_race::Result<()> {
        self.events.push("lineup".into());
        Ok(())
    }

    fn on_round_start(&mut self, round: u32) -> kart_race::Result<()> {
        self.events.push(format!("start {}", round));
        Ok(())
    }

    fn on_block(&mut self, round: u32, _block: BlockType) -> kart_race::Result<()> {
        self.events.push(format!("block {}", round));
        Ok(())
    }

    fn on_round_resolved(&mut self, _matchup: &Matchup, outcome: &RoundOutcome) -> kart_race::Result<()> {
        self.events.push(format!("resolved {}", outcome.round));
        Ok(())
    }

    fn on_between_rounds(&mut self, round: u32) -> kart_race::Result<()> {
        self.events.push(format!("pause {}", round));
        Ok(())
    }

    fn on_result(&mut self, _matchup: &Matchup, _result: &RaceResult) -> kart_race::Result<()> {
        self.events.push("result".into());
        Ok(())
    }
}

fn pair(a: Competitor, b: Competitor) -> Matchup {
    Matchup::new(a, b).unwrap()
}

/// STRAIGHT: A 4+4 = 8, B 3+5 = 8 is a tie with no score change.
#[test]
fn test_scenario_straight_tie() {
    let mut m = pair(Competitor::new("A", 4, 1, 1), Competitor::new("B", 5, 1, 1));

    let outcome = resolve_round(1, BlockType::Straight, 4, 3, &mut m);

    assert_eq!(outcome.total_a, 8);
    assert_eq!(outcome.total_b, 8);
    assert_eq!(outcome.change, ScoreChange::Tie);
    assert_eq!(m.scores(), [0, 0]);
}

/// CLASH: A 2+3 = 5 loses to B 1+5 = 6 but stays at zero.
#[test]
fn test_scenario_clash_no_negative() {
    let mut m = pair(Competitor::new("A", 1, 1, 3), Competitor::new("B", 1, 1, 5));
    assert_eq!(m[Side::A].score, 0);

    let outcome = resolve_round(1, BlockType::Clash, 2, 1, &mut m);

    assert_eq!(outcome.total_a, 5);
    assert_eq!(outcome.total_b, 6);
    assert_eq!(outcome.change, ScoreChange::Shielded(Side::A));
    assert_eq!(m[Side::A].score, 0);
    assert_eq!(m[Side::B].score, 0);
}

/// A wins three straight/curve rounds, B wins two: A wins 3 to 2.
#[test]
fn test_scenario_three_to_two() {
    let mut m = pair(Competitor::new("A", 3, 3, 3), Competitor::new("B", 3, 3, 3));

    let rounds = [
        (BlockType::Straight, 6, 1),
        (BlockType::Curve, 2, 5),
        (BlockType::Curve, 4, 3),
        (BlockType::Straight, 1, 2),
        (BlockType::Straight, 5, 4),
    ];

    for (i, (block, roll_a, roll_b)) in rounds.into_iter().enumerate() {
        resolve_round(i as u32 + 1, block, roll_a, roll_b, &mut m);
    }

    assert_eq!(m.scores(), [3, 2]);
    assert_eq!(declare_winner(&m), RaceResult::Winner(Side::A));
}

#[test]
fn test_hook_order() {
    let mut rng = RaceRng::new(5);
    let mut m = pair(Competitor::new("A", 4, 3, 3), Competitor::new("B", 5, 2, 5));
    let mut log = EventLog::default();

    RoundEngine::new(&mut rng).run(&mut m, &mut log).unwrap();

    let mut expected = Vec::new();
    for round in 1..=ROUNDS {
        expected.push(format!("start {}", round));
        expected.push(format!("block {}", round));
        expected.push(format!("resolved {}", round));
        if round < ROUNDS {
            expected.push(format!("pause {}", round));
        }
    }
    assert_eq!(log.events, expected);
}

#[test]
fn test_full_race_hooks() {
    let race = Race::new(RaceConfig::default().with_seed(99));
    let mut log = EventLog::default();

    race.run(&Roster::classic(), &mut log).unwrap();

    assert_eq!(log.events.first().map(String::as_str), Some("lineup"));
    assert_eq!(log.events.last().map(String::as_str), Some("result"));
    assert_eq!(log.events.iter().filter(|e| e.starts_with("pause")).count(), 4);
}

#[test]
fn test_record_is_consistent() {
    for seed in 0..50 {
        let record = Race::new(RaceConfig::default().with_seed(seed))
            .run(&Roster::classic(), &mut NullObserver)
            .unwrap();

        assert_eq!(record.rounds.len(), ROUNDS as usize);
        assert_ne!(record.competitors[0], record.competitors[1]);

        // Replay the score changes from the transcript
        let mut scores = [0u32; 2];
        for outcome in &record.rounds {
            match outcome.change {
                ScoreChange::Scored(side) => scores[side.index()] += 1,
                ScoreChange::Lost(side) => {
                    assert!(scores[side.index()] > 0);
                    scores[side.index()] -= 1;
                }
                ScoreChange::Shielded(side) => assert_eq!(scores[side.index()], 0),
                ScoreChange::Tie => assert_eq!(outcome.total_a, outcome.total_b),
            }
        }
        assert_eq!(scores, record.final_scores);

        let expected = match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => RaceResult::Winner(Side::A),
            std::cmp::Ordering::Less => RaceResult::Winner(Side::B),
            std::cmp::Ordering::Equal => RaceResult::Tie,
        };
        assert_eq!(record.result, expected);
    }
}

#[test]
fn test_record_serde() {
    let record = Race::new(RaceConfig::default().with_seed(314))
        .run(&Roster::classic(), &mut NullObserver)
        .unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let back: RaceRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(record, back);
}

#[test]
fn test_console_transcript() {
    let config = RaceConfig::default()
        .with_seed(8)
        .with_pacing(Pacing::instant());
    let mut reporter = ConsoleReporter::new(Vec::new(), config.pacing);

    let record = Race::new(config).run(&Roster::classic(), &mut reporter).unwrap();
    let text = String::from_utf8(reporter.into_inner()).unwrap();

    for round in 1..=ROUNDS {
        assert!(text.contains(&format!("Round {}\n", round)));
    }
    assert_eq!(text.matches("Block: ").count(), ROUNDS as usize);
    assert!(text.contains("Final result:"));

    match record.winner_name() {
        Some(name) => assert!(text.contains(&format!("{} won the race!", name))),
        None => assert!(text.contains("The race ended in a tie")),
    }
}

/// A race started mid-stream replays from its recorded RNG position.
#[test]
fn test_replay_after_prior_draws() {
    let race = Race::new(RaceConfig::default());
    let roster = Roster::classic();

    let mut rng = RaceRng::new(7);
    for _ in 0..3 {
        rng.gen_unit();
    }
    let record = race.run_with_rng(&roster, &mut rng, &mut NullObserver).unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let stored: RaceRecord = serde_json::from_str(&json).unwrap();

    let replayed = race
        .run_with_rng(&roster, &mut stored.replay_rng(), &mut NullObserver)
        .unwrap();
    assert_eq!(replayed, record);
}

/// Extreme attributes are totalled without overflow.
#[test]
fn test_max_attribute_competitors_race() {
    let roster = Roster::new(vec![
        Competitor::new("Titan", u8::MAX, u8::MAX, u8::MAX),
        Competitor::new("Pebble", 0, 0, 0),
    ])
    .unwrap();

    let record = Race::new(RaceConfig::default().with_seed(3))
        .run(&roster, &mut NullObserver)
        .unwrap();

    for outcome in &record.rounds {
        assert!(outcome.total_a.max(outcome.total_b) <= 255 + 6);
        assert_ne!(outcome.change, ScoreChange::Tie);
    }
}
