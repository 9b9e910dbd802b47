use glam::{IVec3, Vec3};
use log::info;
use serde_json::{json, Map, Value};

use crate::board::{Board, CellState, GameState, RevealOutcome};
use crate::config::MinesweeperConfig;
use crate::error::{Result, SketchError};
use crate::frame::FrameInfo;
use crate::math::{hsv_to_rgb, Ray};
use crate::scene::{Node, NodeId, NodeKind, Scene};
use crate::traits::Sketch;

const HIDDEN_COLOR: [f32; 3] = [0.55, 0.55, 0.6];
const FLAG_COLOR: [f32; 3] = [0.9, 0.15, 0.1];
const MINE_COLOR: [f32; 3] = [0.05, 0.05, 0.05];

/// Colour of an opened cell showing `count` adjacent mines
pub fn count_color(count: u8) -> [f32; 3] {
    hsv_to_rgb(0.66 - (count as f32 / 26.0) * 0.66, 0.8, 0.9)
}

/// Voxel minesweeper played by a scripted picker orbiting the board
pub struct Minesweeper {
    scene: Scene,
    board: Board,
    voxels: Vec<(IVec3, NodeId)>,
    config: MinesweeperConfig,
    rng: fastrand::Rng,
    games: u32,
    wins: u32,
    losses: u32,
    picks: u32,
}

impl Minesweeper {
    pub fn new(config: &MinesweeperConfig) -> Result<Self> {
        if config.pick_interval == 0 {
            return Err(SketchError::InvalidConfig(
                "minesweeper.pick_interval must be at least 1".into(),
            ));
        }
        let board = Board::new(config.size, config.mines, config.cell_size, config.seed)?;

        let mut scene = Scene::new();
        let voxels = board
            .positions()
            .map(|cell| {
                let center = board.grid().cell_center(cell);
                // slight gap between voxels
                let node = Node::new(format!("voxel-{}-{}-{}", cell.x, cell.y, cell.z), NodeKind::Voxel, center)
                    .with_scale(Vec3::splat(config.cell_size * 0.9))
                    .with_color(HIDDEN_COLOR);
                (cell, scene.add(node))
            })
            .collect();

        info!("minesweeper: {0}x{0}x{0} board, {1} mines", config.size, config.mines);

        Ok(Self {
            scene,
            board,
            voxels,
            config: config.clone(),
            rng: fastrand::Rng::with_seed(config.seed ^ 0x5eed),
            games: 1,
            wins: 0,
            losses: 0,
            picks: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Reveals the first unopened voxel under `ray`, if any.
    pub fn click(&mut self, ray: &Ray) -> Result<Option<RevealOutcome>> {
        let Some(hit) = self.board.pick(ray) else {
            return Ok(None);
        };
        self.picks += 1;
        let outcome = self.board.reveal(hit.cell)?;
        self.sync_voxels();
        Ok(Some(outcome))
    }

    /// Flags or unflags the first unopened voxel under `ray`.
    pub fn right_click(&mut self, ray: &Ray) -> Result<Option<bool>> {
        let Some(hit) = self.board.pick(ray) else {
            return Ok(None);
        };
        let flagged = self.board.toggle_flag(hit.cell)?;
        self.sync_voxels();
        Ok(Some(flagged))
    }

    fn sync_voxels(&mut self) {
        for &(cell, id) in &self.voxels {
            let Ok(state) = self.board.cell(cell) else {
                continue;
            };
            let Some(node) = self.scene.get_mut(id) else {
                continue;
            };
            match state.state {
                CellState::Hidden => node.color = HIDDEN_COLOR,
                CellState::Flagged => node.color = FLAG_COLOR,
                CellState::Revealed if state.mine => node.color = MINE_COLOR,
                CellState::Revealed => {
                    node.visible = state.adjacent > 0;
                    node.color = count_color(state.adjacent);
                }
            }
        }
    }

    fn restart(&mut self) -> Result<()> {
        let seed = self.config.seed.wrapping_add(self.games as u64);
        self.board = Board::new(self.config.size, self.config.mines, self.config.cell_size, seed)?;
        self.games += 1;
        for &(_, id) in &self.voxels {
            if let Some(node) = self.scene.get_mut(id) {
                node.visible = true;
            }
        }
        self.sync_voxels();
        Ok(())
    }

    /// Ray from an eye orbiting the board towards a random unopened cell
    fn scripted_ray(&self, frame: &FrameInfo) -> Option<Ray> {
        let hidden: Vec<IVec3> = self
            .board
            .positions()
            .filter(|p| matches!(self.board.cell(*p), Ok(c) if c.state == CellState::Hidden))
            .collect();
        if hidden.is_empty() {
            return None;
        }
        let target = self.board.grid().cell_center(hidden[self.rng.usize(..hidden.len())]);

        let extent = self.board.grid().bounds().size().length();
        let angle = frame.number as f32 * 0.01;
        let eye = Vec3::new(angle.sin() * extent, extent * 0.5, angle.cos() * extent);
        Some(Ray::new(eye, target - eye))
    }
}

impl Sketch for Minesweeper {
    fn name(&self) -> &str {
        "minesweeper"
    }

    fn update(&mut self, frame: &FrameInfo) {
        if frame.number % self.config.pick_interval != 0 {
            return;
        }

        if matches!(self.board.state(), GameState::Won | GameState::Lost) {
            if let Err(e) = self.restart() {
                log::error!("minesweeper restart failed: {e}");
            }
            return;
        }

        let Some(ray) = self.scripted_ray(frame) else {
            return;
        };
        match self.click(&ray) {
            Ok(Some(RevealOutcome::Detonated)) => {
                self.losses += 1;
                info!("game {} lost after {} cells", self.games, self.board.revealed_count());
            }
            Ok(Some(RevealOutcome::Revealed(_))) if self.board.state() == GameState::Won => {
                self.wins += 1;
                info!("game {} won", self.games);
            }
            Ok(_) => {}
            Err(e) => log::warn!("pick failed: {e}"),
        }
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn summary(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("cells".into(), json!(self.board.len()));
        map.insert("mines".into(), json!(self.board.mine_count()));
        map.insert("games".into(), json!(self.games));
        map.insert("wins".into(), json!(self.wins));
        map.insert("losses".into(), json!(self.losses));
        map.insert("picks".into(), json!(self.picks));
        map.insert("revealed".into(), json!(self.board.revealed_count()));
        map.insert("state".into(), json!(format!("{:?}", self.board.state())));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_through_center_reveals_something() {
        let config = MinesweeperConfig {
            size: 3,
            mines: 1,
            cell_size: 10.0,
            ..Default::default()
        };
        let mut game = Minesweeper::new(&config).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 100.0), -Vec3::Z);

        let outcome = game.click(&ray).unwrap();
        // the first reveal is always safe
        assert!(matches!(outcome, Some(RevealOutcome::Revealed(n)) if n >= 1));
    }

    #[test]
    fn click_outside_board_is_none() {
        let mut game = Minesweeper::new(&MinesweeperConfig::default()).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 1000.0, 0.0), Vec3::Y);
        assert_eq!(game.click(&ray).unwrap(), None);
    }

    #[test]
    fn zero_pick_interval_is_rejected() {
        let config = MinesweeperConfig {
            pick_interval: 0,
            ..Default::default()
        };
        assert!(matches!(Minesweeper::new(&config), Err(SketchError::InvalidConfig(_))));
    }
}
