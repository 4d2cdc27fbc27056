//! DOM presenter
//!
//! Draws the frame as absolutely-positioned emoji sprites inside the
//! playfield element and keeps the HUD text in sync. Sprite nodes are
//! pooled per entity class and grown/shrunk to match each frame.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::frame::RenderFrame;
use crate::consts::HITBOX_SIZE;
use crate::highscores::HighScores;
use crate::sim::GamePhase;

const PLAYER_GLYPH: &str = "\u{1F422}"; // 🐢
const PLATFORM_GLYPH: &str = "\u{1F7E9}"; // 🟩
const COIN_GLYPH: &str = "\u{1F4B0}"; // 💰
const ENEMY_GLYPH: &str = "\u{1F47E}"; // 👾
const POWER_UP_GLYPH: &str = "\u{2B50}"; // ⭐
const HEART_GLYPH: &str = "\u{2764}\u{FE0F}"; // ❤️

/// DOM-backed presenter for [`RenderFrame`]
pub struct DomRenderer {
    document: Document,
    playfield: Element,
    player: HtmlElement,
    platforms: Vec<HtmlElement>,
    coins: Vec<HtmlElement>,
    enemies: Vec<HtmlElement>,
    power_ups: Vec<HtmlElement>,
}

impl DomRenderer {
    /// Attach to the page. The playfield element must exist; everything
    /// else is created on demand.
    pub fn new(document: Document) -> Self {
        let playfield = document
            .get_element_by_id("playfield")
            .expect("no playfield element");

        let player = create_sprite(&document, "sprite player", PLAYER_GLYPH);
        let _ = playfield.append_child(&player);

        Self {
            document,
            playfield,
            player,
            platforms: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
        }
    }

    /// Draw one frame: sprites, HUD, transient message
    pub fn render(&mut self, frame: &RenderFrame) {
        self.sync_platforms(frame);

        sync_pool(
            &self.document,
            &self.playfield,
            &mut self.coins,
            frame.coins.len(),
            "sprite coin",
            COIN_GLYPH,
        );
        sync_pool(
            &self.document,
            &self.playfield,
            &mut self.enemies,
            frame.enemies.len(),
            "sprite enemy",
            ENEMY_GLYPH,
        );
        sync_pool(
            &self.document,
            &self.playfield,
            &mut self.power_ups,
            frame.power_ups.len(),
            "sprite power-up",
            POWER_UP_GLYPH,
        );

        for (node, pos) in self.coins.iter().zip(&frame.coins) {
            place(node, *pos);
        }
        for (node, pos) in self.enemies.iter().zip(&frame.enemies) {
            place(node, *pos);
        }
        for (node, pos) in self.power_ups.iter().zip(&frame.power_ups) {
            place(node, *pos);
        }

        place(&self.player, frame.player_pos);
        self.player.set_class_name(if frame.powered_up {
            "sprite player powered"
        } else {
            "sprite player"
        });

        self.update_hud(frame);
    }

    /// Platforms carry a width, so their pool is rebuilt with per-node
    /// glyph runs instead of single sprites
    fn sync_platforms(&mut self, frame: &RenderFrame) {
        sync_pool(
            &self.document,
            &self.playfield,
            &mut self.platforms,
            frame.platforms.len(),
            "platform",
            "",
        );

        for (node, platform) in self.platforms.iter().zip(&frame.platforms) {
            place(node, platform.pos);
            let tiles = (platform.width / HITBOX_SIZE).ceil().max(1.0) as usize;
            node.set_text_content(Some(&PLATFORM_GLYPH.repeat(tiles)));
            let _ = node
                .style()
                .set_property("width", &format!("{}px", platform.width));
        }
    }

    fn update_hud(&self, frame: &RenderFrame) {
        if let Some(el) = self.document.get_element_by_id("hud-score") {
            el.set_text_content(Some(&frame.score.to_string()));
        }
        if let Some(el) = self.document.get_element_by_id("hud-lives") {
            el.set_text_content(Some(&HEART_GLYPH.repeat(frame.lives as usize)));
        }
        if let Some(el) = self.document.get_element_by_id("hud-level") {
            el.set_text_content(Some(&frame.level.to_string()));
        }

        if let Some(el) = self.document.get_element_by_id("message") {
            match &frame.message {
                Some(text) => {
                    el.set_text_content(Some(text));
                    let _ = el.set_attribute("class", "message");
                }
                None => {
                    let _ = el.set_attribute("class", "message hidden");
                }
            }
        }
    }

    /// Show the screen for the given phase, hiding the other two
    pub fn show_screen(&self, phase: GamePhase) {
        let screens = [
            ("menu", GamePhase::Menu),
            ("game", GamePhase::Playing),
            ("game-over", GamePhase::GameOver),
        ];
        for (id, screen_phase) in screens {
            if let Some(el) = self.document.get_element_by_id(id) {
                let class = if phase == screen_phase {
                    "screen"
                } else {
                    "screen hidden"
                };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    /// Fill the game-over screen: final score and the leaderboard
    pub fn render_game_over(&self, score: u32, scores: &HighScores) {
        if let Some(el) = self.document.get_element_by_id("final-score") {
            el.set_text_content(Some(&score.to_string()));
        }

        if let Some(list) = self.document.get_element_by_id("highscores-list") {
            list.set_text_content(None); // clear previous entries
            for entry in &scores.entries {
                if let Ok(li) = self.document.create_element("li") {
                    li.set_text_content(Some(&format!("{}: {}", entry.name, entry.score)));
                    let _ = list.append_child(&li);
                }
            }
        }
    }
}

fn create_sprite(document: &Document, class: &str, glyph: &str) -> HtmlElement {
    let node: HtmlElement = document
        .create_element("div")
        .expect("create sprite node")
        .dyn_into()
        .expect("sprite node is an HtmlElement");
    node.set_class_name(class);
    node.set_text_content(Some(glyph));
    node
}

/// Grow or shrink a sprite pool to the wanted count
fn sync_pool(
    document: &Document,
    playfield: &Element,
    pool: &mut Vec<HtmlElement>,
    count: usize,
    class: &str,
    glyph: &str,
) {
    while pool.len() < count {
        let node = create_sprite(document, class, glyph);
        if playfield.append_child(&node).is_err() {
            return;
        }
        pool.push(node);
    }
    while pool.len() > count {
        if let Some(node) = pool.pop() {
            node.remove();
        }
    }
}

fn place(node: &HtmlElement, pos: Vec2) {
    let style = node.style();
    let _ = style.set_property("left", &format!("{}px", pos.x));
    let _ = style.set_property("top", &format!("{}px", pos.y));
}
