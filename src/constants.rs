//! Parametros de configuracion de la maquina de cafe

/// Capacidad inicial del contenedor de agua
pub const WATER_STORAGE: u64 = 1000;

/// Capacidad inicial del contenedor de granos de cafe
pub const BEANS_STORAGE: u64 = 500;

/// Capacidad inicial del contenedor de leche
pub const MILK_STORAGE: u64 = 750;
