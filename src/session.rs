//! The field: menu loop, round lifecycle and the endings.

use rand::Rng;

use crate::actions::{self, CaveOutcome, FightOutcome};
use crate::catalog::{CAVE_REWARD, Catalog, STARTER_TOOL};
use crate::config::GameConfig;
use crate::inventory::Inventory;
use crate::ledger::Ledger;
use crate::persistence::SaveFile;
use crate::ui::{self, Presentation, Selection};

/// Everything that belongs to one round of play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub inventory: Inventory,
    pub ledger: Ledger,
    /// The creature living in the house, once someone has knocked.
    pub pinned: Option<String>,
}

impl Session {
    pub fn new(config: &GameConfig, score: u32) -> Self {
        Self {
            inventory: Inventory::with_items([STARTER_TOOL]),
            ledger: Ledger::new(config.starting_hit_points, score),
            pinned: None,
        }
    }

    /// Resume from the save file if there is a usable one, otherwise start fresh.
    pub fn restore_or_new(store: Option<&SaveFile>, config: &GameConfig) -> Self {
        let Some(store) = store else { return Self::new(config, 0) };
        match store.load() {
            Ok(Some((inventory, ledger))) if !ledger.is_defeated() => {
                Self { inventory, ledger, pinned: None }
            }
            Ok(Some(_)) => {
                tracing::info!("Saved game had no health left, starting fresh");
                Self::new(config, 0)
            }
            Ok(None) => {
                tracing::info!("No save at {}, starting fresh", store.path().display());
                Self::new(config, 0)
            }
            Err(e) => {
                tracing::warn!("Could not load {}: {}. Starting fresh.", store.path().display(), e);
                Self::new(config, 0)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Victory,
    Defeat,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub ending: Ending,
    pub final_score: u32,
    pub rounds: u32,
}

/// How a round stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    /// Beat a creature but the target score is still out of reach.
    Won,
    Victory,
    Defeat,
    Quit,
}

pub struct Game<P, R> {
    config: GameConfig,
    catalog: Catalog,
    rng: R,
    ui: P,
    store: Option<SaveFile>,
    session: Session,
    resumed: bool,
    rounds: u32,
}

impl<P: Presentation, R: Rng> Game<P, R> {
    pub fn new(config: GameConfig, catalog: Catalog, rng: R, ui: P) -> Self {
        let session = Session::new(&config, 0);
        Self { config, catalog, rng, ui, store: None, session, resumed: false, rounds: 0 }
    }

    /// Attach a save file: the session is restored from it and written back on quit.
    pub fn with_store(mut self, store: SaveFile) -> Self {
        self.session = Session::restore_or_new(Some(&store), &self.config);
        self.resumed = self.session != Session::new(&self.config, 0);
        self.store = Some(store);
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn ui(&self) -> &P {
        &self.ui
    }

    pub fn into_ui(self) -> P {
        self.ui
    }

    /// Play until the player quits or declines another go.
    pub fn run(&mut self) -> GameSummary {
        loop {
            self.rounds += 1;
            tracing::info!(round = self.rounds, score = self.session.ledger.score, "Round started");
            self.intro();
            let end = self.play_round();
            let score = self.session.ledger.score;
            let ending = match end {
                RoundEnd::Quit => {
                    self.save_on_quit();
                    self.say("Thanks for playing! See you next time.");
                    return self.summary(Ending::Quit);
                }
                RoundEnd::Won => {
                    if self.ask_replay("Would you like to play again? (y/n)") {
                        self.say("Restarting the game while saving your score...");
                        self.session = Session::new(&self.config, score);
                        continue;
                    }
                    Ending::Quit
                }
                RoundEnd::Victory => {
                    self.say(&format!(
                        "Congratulations! You won by reaching the target score of {}!",
                        self.config.target_score
                    ));
                    Ending::Victory
                }
                RoundEnd::Defeat => {
                    self.say("You have been defeated!");
                    Ending::Defeat
                }
            };
            if ending != Ending::Quit && self.ask_replay("Would you like to play again? (yes/no)") {
                self.say("Restarting the game...");
                self.session = Session::new(&self.config, 0);
                continue;
            }
            self.say(&format!("Thanks for playing! Your final score was {}. Goodbye!", score));
            return self.summary(ending);
        }
    }

    fn play_round(&mut self) -> RoundEnd {
        loop {
            if self.session.ledger.has_won(self.config.target_score) {
                return RoundEnd::Victory;
            }
            self.say(&format!("Your current health: {}", self.session.ledger.display_hit_points()));
            self.say(&format!("Your current score: {}", self.session.ledger.score));
            self.say("\nEnter 1 to knock on the door of the house.");
            self.say("Enter 2 to peer into the cave.");
            self.say("Enter 3 to explore the forest.");
            self.say(if self.store.is_some() {
                "Enter 4 to save and exit the game."
            } else {
                "Enter 4 to exit the game."
            });
            let choice = ui::prompt_choice(
                &mut self.ui,
                "(Please enter 1, 2, 3, or 4.)",
                &["1", "2", "3", "4"],
            );
            match choice.as_deref() {
                Some("1") => {
                    if let Some(end) = self.house() {
                        return end;
                    }
                }
                Some("2") => self.cave(),
                Some("3") => self.forest(),
                _ => return RoundEnd::Quit,
            }
        }
    }

    fn intro(&mut self) {
        ui::print_simple_header(&mut self.ui, "The Field");
        self.say(
            "You find yourself standing in an open field, filled with grass and yellow wildflowers.",
        );
        self.say(
            "Rumor has it that a dangerous creature is somewhere around here, \
             and has been terrifying the nearby village.",
        );
        self.say("In front of you is a house.");
        self.say("To your right is a dark cave.");
        if std::mem::take(&mut self.resumed) {
            self.say("Your backpack feels familiar. You pick up where you left off.");
        } else {
            self.say("In your hand you hold your trusty (but not very effective) cracked wand.");
        }
    }

    fn cave(&mut self) {
        ui::print_simple_header(&mut self.ui, "Cave");
        self.say("You peer cautiously into the cave.");
        match actions::explore_cave(&mut self.session.inventory) {
            CaveOutcome::Empty => self.say(
                "You've been here before, and gotten all the good stuff. It's just an empty cave now.",
            ),
            CaveOutcome::Found { discarded_starter } => {
                self.say("It turns out to be only a very small cave.");
                self.say("Your eye catches a glint of metal behind a rock.");
                self.say("You have found the legendary Wand of Radiance!");
                if discarded_starter {
                    self.say(&format!(
                        "You discard your {} and take the {} with you.",
                        STARTER_TOOL, CAVE_REWARD
                    ));
                }
                self.say(&format!("{} has been added to the backpack.", CAVE_REWARD));
            }
        }
        self.say("You walk back out to the field.");
    }

    fn forest(&mut self) {
        ui::print_simple_header(&mut self.ui, "Forest");
        self.say("You venture into the dense forest.");
        let outcome = actions::explore_forest(&mut self.session.inventory, &mut self.rng);
        self.say(outcome.event.narration());
        if let Some(discarded) = outcome.discarded {
            self.say(&format!("You discard your {} and take the new find with you.", discarded));
        }
        if let Some(added) = outcome.added {
            self.say(&format!("{} has been added to the backpack.", added));
        }
        self.say("You walk back out to the field.");
    }

    /// `Some` when the visit ends the round.
    fn house(&mut self) -> Option<RoundEnd> {
        ui::print_simple_header(&mut self.ui, "House");
        self.say("You approach the door of the house.");
        let Some(creature) =
            actions::choose_creature(&mut self.session.pinned, &self.catalog, &mut self.rng)
        else {
            self.say("Nobody is home. You walk back out to the field.");
            return None;
        };
        let name = creature.name.as_str();
        self.say(&format!(
            "You are about to knock when the door opens and out steps a {}.",
            name
        ));
        self.say(&format!("Eep! This is the {}'s house!", name));
        self.say(&format!("The {} finds you!", name));
        self.say("You feel a bit under-prepared for this.");

        let action = ui::prompt_choice(
            &mut self.ui,
            "Would you like to (1) fight or (2) run away?",
            &["1", "2"],
        );
        match action.as_deref() {
            Some("1") => {}
            Some(_) => {
                self.say(
                    "You run back into the field. Luckily, you don't seem to have been followed.",
                );
                return None;
            }
            None => return Some(RoundEnd::Quit),
        }

        let weapon = match ui::select_item(&mut self.ui, &self.session.inventory, &self.catalog) {
            Selection::Item(idx) => self.session.inventory.get(idx).map(str::to_string),
            Selection::Cancelled | Selection::Empty => None,
        };
        let Some(weapon) = weapon else {
            self.say("You think better of it and slip back into the field.");
            return None;
        };
        let power = self.catalog.tool_power(&weapon);
        self.say(&format!("You have chosen the {} (Power: {}).", weapon, power));

        let outcome = actions::fight(
            &mut self.session.ledger,
            &creature,
            power,
            self.config.damage_per_loss,
            self.config.target_score,
        );
        match outcome {
            FightOutcome::Victory { gained, score, reached_target } => {
                self.say(&format!("As the {} moves to attack, you raise your {}.", name, weapon));
                if self.session.inventory.contains(CAVE_REWARD) {
                    self.say(&format!(
                        "The {} shines brightly in your hand as you brace yourself.",
                        weapon
                    ));
                } else {
                    self.say(&format!(
                        "But the {} takes one look at your shiny new wand and runs away!",
                        name
                    ));
                }
                self.say(&format!("You have rid the town of the {}. You are victorious!", name));
                self.say(&format!("You earn {} points. Your score is now {}.", gained, score));
                self.session.pinned = None;
                Some(if reached_target { RoundEnd::Victory } else { RoundEnd::Won })
            }
            FightOutcome::Wounded { hit_points, .. } => {
                self.say(&format!(
                    "You do your best, but your {} is no match for the {}.",
                    weapon, name
                ));
                self.say(&format!("The {} attacks you! Your health is now {}.", name, hit_points));
                self.say("You manage to escape back into the field.");
                None
            }
            FightOutcome::Defeated { .. } => {
                self.say(&format!(
                    "You do your best, but your {} is no match for the {}.",
                    weapon, name
                ));
                self.say(&format!("The {} attacks you! Your health is now 0.", name));
                Some(RoundEnd::Defeat)
            }
        }
    }

    fn ask_replay(&mut self, question: &str) -> bool {
        ui::prompt_yes_no(&mut self.ui, question).unwrap_or(false)
    }

    fn save_on_quit(&mut self) {
        let Some(store) = &self.store else { return };
        match store.save(&self.session.inventory, &self.session.ledger) {
            Ok(()) => self.ui.display("Game saved!"),
            Err(e) => self.ui.display(&format!("Failed to save game: {}", e)),
        }
    }

    fn summary(&self, ending: Ending) -> GameSummary {
        tracing::info!(
            ?ending,
            score = self.session.ledger.score,
            rounds = self.rounds,
            "Game over"
        );
        GameSummary { ending, final_score: self.session.ledger.score, rounds: self.rounds }
    }

    fn say(&mut self, line: &str) {
        self.ui.display(line);
    }
}
