use macroquad::prelude::{debug, info};
use rayon::prelude::*;

mod point;
pub use point::PointMass;

use crate::{
    config::SimulationConfig,
    error::SimulationError,
    input::Command,
    render::Canvas,
    spring::Spring,
    vector::Vector2,
};

/// Size of the area points are kept inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}
impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug)]
pub struct World {
    config: SimulationConfig,
    points: Vec<PointMass>,
    springs: Vec<Spring>,
    // Index of the point currently following the pointer
    dragged: Option<usize>,
    mouse_position: Vector2,
    drag_modifier_active: bool,
    // Held modifier that turns a primary click into a linking click
    link_modifier_active: bool,
}
impl World {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self {
            config,
            points: vec![],
            springs: vec![],
            dragged: None,
            mouse_position: Vector2::zero(),
            drag_modifier_active: false,
            link_modifier_active: false,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
    pub fn points(&self) -> &[PointMass] {
        &self.points
    }
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }
    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }
    pub fn mouse_position(&self) -> Vector2 {
        self.mouse_position
    }

    pub fn place_point(&mut self, position: Vector2) -> usize {
        self.points.push(PointMass::new(position));
        let idx = self.points.len() - 1;
        debug!("placed point {} at ({}, {})", idx, position.x, position.y);
        idx
    }

    pub fn spring_exists(&self, a: usize, b: usize) -> bool {
        self.springs.iter().any(|spring| spring.connects(a, b))
    }

    /// Adds a spring between two existing points.
    /// Returns `false` if the pair was already connected.
    pub fn connect(&mut self, a: usize, b: usize) -> Result<bool, SimulationError> {
        let count = self.points.len();
        for index in [a, b] {
            if index >= count {
                return Err(SimulationError::PointOutOfBounds { index, count });
            }
        }
        if a == b {
            return Err(SimulationError::SelfSpring { index: a });
        }
        if self.spring_exists(a, b) {
            return Ok(false);
        }

        self.springs.push(
            Spring::new(a, b)
                .rest_length(self.config.rest_length)
                .stiffness_divisor(self.config.stiffness_divisor),
        );
        Ok(true)
    }

    /// Highlights every point near `position` and, once at least two points are highlighted,
    /// connects each pair of them and clears the selection.
    /// Returns the number of springs created.
    pub fn begin_linking(&mut self, position: Vector2) -> Result<usize, SimulationError> {
        let threshold = self.config.mouse_threshold;
        for point in self.points.iter_mut() {
            if point.position.distance(position) < threshold {
                point.highlighted = true;
            }
        }

        let highlighted = self
            .points
            .iter()
            .enumerate()
            .filter_map(|(idx, point)| point.highlighted.then_some(idx))
            .collect::<Vec<usize>>();
        if highlighted.len() < 2 {
            return Ok(0);
        }

        let mut created = 0;
        for (i, &a) in highlighted.iter().enumerate() {
            for &b in &highlighted[i + 1..] {
                if self.connect(a, b)? {
                    created += 1;
                }
            }
            self.points[a].highlighted = false;
        }
        info!("linked {} points with {} new springs", highlighted.len(), created);
        Ok(created)
    }

    /// Starts dragging the point closest to the mouse, if it is within the selection threshold.
    pub fn begin_drag(&mut self) {
        if self.dragged.is_some() {
            return;
        }
        let mouse = self.mouse_position;
        let closest = self
            .points
            .iter()
            .enumerate()
            .map(|(idx, point)| (idx, point.position.distance(mouse)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b));

        let Some((idx, distance)) = closest else {
            return;
        };
        if distance >= self.config.mouse_threshold {
            return;
        }

        let point = &mut self.points[idx];
        point.dragged = true;
        point.snap_to(mouse);
        self.dragged = Some(idx);
        info!("dragging point {}", idx);
    }

    pub fn end_drag(&mut self) {
        if let Some(idx) = self.dragged.take() {
            self.points[idx].dragged = false;
            info!("released point {}", idx);
        }
    }

    pub fn set_mouse_position(&mut self, position: Vector2) {
        self.mouse_position = position;
        if let Some(idx) = self.dragged {
            self.points[idx].snap_to(position);
        }
    }

    /// Dispatches one input command.
    pub fn apply(&mut self, command: Command) -> Result<(), SimulationError> {
        match command {
            Command::PointerMoved(position) => self.set_mouse_position(position),
            Command::PrimaryDown(position) => {
                if self.link_modifier_active {
                    self.begin_linking(position)?;
                } else {
                    self.place_point(position);
                }
            }
            Command::SecondaryDown(position) => {
                self.begin_linking(position)?;
            }
            Command::DragKey { pressed: true } => {
                self.drag_modifier_active = true;
                self.begin_drag();
            }
            Command::DragKey { pressed: false } => {
                self.drag_modifier_active = false;
                self.end_drag();
            }
            Command::LinkModifier { pressed } => self.link_modifier_active = pressed,
        }
        Ok(())
    }

    pub fn is_drag_modifier_active(&self) -> bool {
        self.drag_modifier_active
    }
    pub fn is_link_modifier_active(&self) -> bool {
        self.link_modifier_active
    }

    /// Springs first, in insertion order, then every point.
    pub fn update(&mut self, bounds: Bounds, adjust: f64) -> Result<(), SimulationError> {
        for spring in self.springs.iter() {
            spring.update(&mut self.points)?;
        }

        // A point's integration only reads and writes that point
        let config = &self.config;
        self.points
            .par_iter_mut()
            .try_for_each(|point| point.update(bounds, adjust, config))
    }

    pub fn draw(&self, canvas: &mut impl Canvas) -> Result<(), SimulationError> {
        for spring in self.springs.iter() {
            spring.draw(&self.points, canvas)?;
        }
        for point in self.points.iter() {
            point.draw(canvas, &self.config);
        }
        Ok(())
    }

    /// Runs one frame: clear, update, draw.
    pub fn tick(&mut self, adjust: f64, canvas: &mut impl Canvas) -> Result<(), SimulationError> {
        canvas.clear();
        self.update(canvas.bounds(), adjust)?;
        self.draw(canvas)
    }
}
