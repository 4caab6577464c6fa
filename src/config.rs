/* fixed window geometry, in logical units; the frame buffer matches it one to one */
pub const WINDOW_WIDTH: u32 = 1400;
pub const WINDOW_HEIGHT: u32 = 800;

pub const WINDOW_TITLE: &str = "PlanificadorSim - Sistema de Planificación de Procesos";

/* render/update loop rate */
pub const TICKS_PER_SECOND: u32 = 60;

pub const DEFAULT_LOG_FILTER: &str = "info";
