//! Rules of the voxel minesweeper: an `n x n x n` block of cells where every
//! cell touches up to 26 neighbours.

use glam::{IVec3, UVec3};
use log::debug;
use std::collections::VecDeque;

use crate::error::{Result, SketchError};
use crate::math::{CellHit, Ray, VoxelGrid};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub mine: bool,
    pub adjacent: u8,
    pub state: CellState,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    /// No cell revealed yet; the first reveal is guaranteed safe
    Ready,
    Playing,
    Won,
    Lost,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Number of cells newly uncovered (flood fill included)
    Revealed(usize),
    Detonated,
    /// Cell already open, flagged, or the game is over
    Ignored,
}

/// Largest edge length whose cell count still fits the `i32` cell indexing
pub const MAX_SIZE: u32 = 1290;

pub struct Board {
    grid: VoxelGrid,
    cells: Vec<Cell>,
    mines: u32,
    flags: u32,
    revealed: usize,
    state: GameState,
}

impl Board {
    /// Builds a cube board of `size^3` cells with `mines` placed from `seed`.
    pub fn new(size: u32, mines: u32, cell_size: f32, seed: u64) -> Result<Self> {
        if size == 0 {
            return Err(SketchError::InvalidBoard("size must be at least 1".into()));
        }
        if size > MAX_SIZE {
            return Err(SketchError::InvalidBoard(format!(
                "size {size} exceeds the largest supported edge of {MAX_SIZE}"
            )));
        }
        let total = (size as usize)
            .checked_pow(3)
            .ok_or_else(|| SketchError::InvalidBoard(format!("size {size} overflows the cell count")))?;
        if mines as usize >= total {
            return Err(SketchError::InvalidBoard(format!(
                "{mines} mines leave no safe cell on a board of {total}"
            )));
        }

        let empty = Cell {
            mine: false,
            adjacent: 0,
            state: CellState::Hidden,
        };
        let mut board = Self {
            grid: VoxelGrid::centered(cell_size, UVec3::splat(size)),
            cells: vec![empty; total],
            mines,
            flags: 0,
            revealed: 0,
            state: GameState::Ready,
        };

        let mut order: Vec<usize> = (0..total).collect();
        fastrand::Rng::with_seed(seed).shuffle(&mut order);
        for &i in &order[..mines as usize] {
            board.cells[i].mine = true;
        }
        board.recount();

        Ok(board)
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mine_count(&self) -> u32 {
        self.mines
    }

    /// Mines minus flags placed; negative when over-flagged.
    pub fn remaining_mines(&self) -> i64 {
        self.mines as i64 - self.flags as i64
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, pos: IVec3) -> Result<&Cell> {
        let i = self.index(pos)?;
        Ok(&self.cells[i])
    }

    /// All cell coordinates in storage order (x fastest).
    pub fn positions(&self) -> impl Iterator<Item = IVec3> + '_ {
        (0..self.cells.len()).map(move |i| self.position_of(i))
    }

    pub fn neighbors(&self, pos: IVec3) -> impl Iterator<Item = IVec3> + '_ {
        (-1..=1)
            .flat_map(|z| (-1..=1).flat_map(move |y| (-1..=1).map(move |x| IVec3::new(x, y, z))))
            .filter(|offset| *offset != IVec3::ZERO)
            .map(move |offset| pos + offset)
            .filter(move |p| self.grid.contains_cell(*p))
    }

    pub fn reveal(&mut self, pos: IVec3) -> Result<RevealOutcome> {
        let start = self.index(pos)?;

        if matches!(self.state, GameState::Won | GameState::Lost) {
            return Ok(RevealOutcome::Ignored);
        }
        if self.cells[start].state != CellState::Hidden {
            return Ok(RevealOutcome::Ignored);
        }

        if self.state == GameState::Ready {
            if self.cells[start].mine {
                self.relocate_mine(start);
            }
            self.state = GameState::Playing;
        }

        if self.cells[start].mine {
            self.cells[start].state = CellState::Revealed;
            self.state = GameState::Lost;
            for cell in self.cells.iter_mut().filter(|c| c.mine) {
                cell.state = CellState::Revealed;
            }
            debug!("mine hit at {pos}");
            return Ok(RevealOutcome::Detonated);
        }

        let mut opened = 0;
        let mut queue = VecDeque::from([start]);
        self.cells[start].state = CellState::Revealed;

        while let Some(i) = queue.pop_front() {
            opened += 1;
            if self.cells[i].adjacent != 0 {
                continue;
            }
            let neighbours: Vec<IVec3> = self.neighbors(self.position_of(i)).collect();
            for n in neighbours {
                let j = self.linear(n);
                let cell = &mut self.cells[j];
                if cell.state == CellState::Hidden && !cell.mine {
                    cell.state = CellState::Revealed;
                    queue.push_back(j);
                }
            }
        }

        self.revealed += opened;
        if self.revealed == self.cells.len() - self.mines as usize {
            self.state = GameState::Won;
            for cell in self.cells.iter_mut().filter(|c| c.mine) {
                cell.state = CellState::Flagged;
            }
            self.flags = self.mines;
            debug!("board cleared");
        }

        Ok(RevealOutcome::Revealed(opened))
    }

    /// Toggles a flag on a hidden cell; returns whether the cell is now flagged.
    pub fn toggle_flag(&mut self, pos: IVec3) -> Result<bool> {
        let i = self.index(pos)?;
        if matches!(self.state, GameState::Won | GameState::Lost) {
            return Ok(self.cells[i].state == CellState::Flagged);
        }

        let cell = &mut self.cells[i];
        match cell.state {
            CellState::Hidden => {
                cell.state = CellState::Flagged;
                self.flags += 1;
                Ok(true)
            }
            CellState::Flagged => {
                cell.state = CellState::Hidden;
                self.flags -= 1;
                Ok(false)
            }
            CellState::Revealed => Ok(false),
        }
    }

    /// First unopened cell (hidden or flagged) the ray passes through.
    pub fn pick(&self, ray: &Ray) -> Option<CellHit> {
        self.grid
            .traverse(ray)
            .into_iter()
            .find(|hit| self.cells[self.linear(hit.cell)].state != CellState::Revealed)
    }

    fn relocate_mine(&mut self, from: usize) {
        if let Some(to) = self.cells.iter().position(|c| !c.mine) {
            self.cells[from].mine = false;
            self.cells[to].mine = true;
            debug!("first reveal moved a mine from cell {from} to {to}");
            self.recount();
        }
    }

    fn recount(&mut self) {
        for i in 0..self.cells.len() {
            let pos = self.position_of(i);
            let count = self
                .neighbors(pos)
                .filter(|n| self.cells[self.linear(*n)].mine)
                .count();
            self.cells[i].adjacent = count as u8;
        }
    }

    fn index(&self, pos: IVec3) -> Result<usize> {
        if self.grid.contains_cell(pos) {
            Ok(self.linear(pos))
        } else {
            Err(SketchError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                z: pos.z,
            })
        }
    }

    fn linear(&self, pos: IVec3) -> usize {
        let d = self.grid.dims.as_ivec3();
        (pos.x + d.x * (pos.y + d.y * pos.z)) as usize
    }

    fn position_of(&self, i: usize) -> IVec3 {
        let d = self.grid.dims.as_ivec3();
        let i = i as i32;
        IVec3::new(i % d.x, (i / d.x) % d.y, i / (d.x * d.y))
    }
}
