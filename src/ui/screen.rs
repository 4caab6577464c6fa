use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::palette::Palette;
use crate::render::{FontRole, Renderer};
use crate::ui::{ControlAction, ControlColors, InteractiveControl};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/* dispatch targets; these must match the simulator program names exactly */
pub const PRIORITY_TARGET: &str = "PrioridadEstaticaDinamica";
pub const FCFS_TARGET: &str = "fcfs2";
pub const ROUND_ROBIN_TARGET: &str = "RoundRobin";
pub const SJF_TARGET: &str = "DemoSO_SJF_3";

const SHADOW_OFFSET: Point = Point::new(5, 5);

/// Names a screen without carrying its controls, so actions can refer to screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    MainMenu,
}

/**
 * One variant per screen, each owning the controls it shows. Exactly one screen is active at a
 * time, and only its controls are hit tested and drawn.
 */
#[derive(Debug, Clone)]
pub enum Screen {
    MainMenu(MainMenu),
}

impl Screen {
    pub fn build(id: ScreenId, palette: &Palette) -> Screen {
        match id {
            ScreenId::MainMenu => Screen::MainMenu(MainMenu::new(palette)),
        }
    }

    pub fn id(&self) -> ScreenId {
        match self {
            Screen::MainMenu(_) => ScreenId::MainMenu,
        }
    }

    pub fn controls(&self) -> &[InteractiveControl] {
        match self {
            Screen::MainMenu(menu) => &menu.controls,
        }
    }

    pub fn controls_mut(&mut self) -> &mut [InteractiveControl] {
        match self {
            Screen::MainMenu(menu) => &mut menu.controls,
        }
    }

    /// First control, in declaration order, whose region holds `pointer`.
    pub fn hit(&self, pointer: Point) -> Option<&InteractiveControl> {
        self.controls()
            .iter()
            .find(|control| control.is_clicked(pointer))
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R, palette: &Palette) {
        match self {
            Screen::MainMenu(menu) => menu.draw(renderer, palette),
        }
    }
}

/// The 2x2 grid of simulators plus the exit button.
#[derive(Debug, Clone)]
pub struct MainMenu {
    controls: Vec<InteractiveControl>,
}

impl MainMenu {
    pub fn new(palette: &Palette) -> MainMenu {
        let colors = |normal, hover| ControlColors {
            normal,
            hover,
            text: palette.text,
        };

        MainMenu::with_controls(vec![
            InteractiveControl::new(
                button(150, 280, 480, 100),
                "Prioridad (Estática/Dinámica)",
                colors(palette.accent, palette.accent_hover),
                ControlAction::Launch(PRIORITY_TARGET),
            ),
            InteractiveControl::new(
                button(770, 280, 480, 100),
                "FCFS (First Come First Served)",
                colors(palette.light_blue, palette.light_blue_hover),
                ControlAction::Launch(FCFS_TARGET),
            ),
            InteractiveControl::new(
                button(150, 450, 480, 100),
                "Round Robin",
                colors(palette.green, palette.green_hover),
                ControlAction::Launch(ROUND_ROBIN_TARGET),
            ),
            InteractiveControl::new(
                button(770, 450, 480, 100),
                "SJF (Shortest Job First)",
                colors(palette.orange, palette.orange_hover),
                ControlAction::Launch(SJF_TARGET),
            ),
            InteractiveControl::new(
                button(575, 620, 250, 60),
                "Salir",
                colors(palette.red, palette.red_hover),
                ControlAction::Exit,
            ),
        ])
    }

    pub fn with_controls(controls: Vec<InteractiveControl>) -> MainMenu {
        MainMenu { controls }
    }

    fn draw<R: Renderer>(&self, renderer: &mut R, palette: &Palette) {
        let center_x = (WINDOW_WIDTH / 2) as i32;

        renderer.vertical_gradient(palette.background_dark, palette.background_medium);

        renderer.text(
            "PlanificadorSim",
            Point::new(center_x, 60),
            FontRole::Title,
            palette.text,
        );
        renderer.text(
            "Simulador de Algoritmos de Planificación de Procesos",
            Point::new(center_x, 110),
            FontRole::Subtitle,
            palette.text_secondary,
        );
        renderer.line(
            Point::new(200, 150),
            Point::new(WINDOW_WIDTH as i32 - 200, 150),
            palette.accent,
            3,
        );
        renderer.text(
            "Selecciona un algoritmo de planificación",
            Point::new(center_x, 200),
            FontRole::Subtitle,
            palette.text_secondary,
        );

        for control in &self.controls {
            /* algorithm buttons sit on a flat drop shadow, the exit button does not */
            if let ControlAction::Launch(_) = control.action() {
                let shadow = control.region().translate(SHADOW_OFFSET);
                renderer.fill_rect(shadow, palette.background_medium, 0);
            }
            control.draw(renderer);
        }

        renderer.text(
            "Haz clic en cualquier algoritmo para ejecutarlo",
            Point::new(center_x, WINDOW_HEIGHT as i32 - 30),
            FontRole::Body,
            palette.text_secondary,
        );
    }
}

fn button(x: i32, y: i32, width: u32, height: u32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(width, height))
}
