//! Unit prices and intensity factors per material (USD)

use crate::model::{MaterialRate, QuantityRule};

/// Rooms every building has but the prediction does not count
/// (kitchen and living room)
pub const ROOM_ALLOWANCE: u64 = 2;

/// Labour surcharge as a fraction of the predicted total build cost
pub const LABOUR_RATE: f64 = 0.2;

pub const FOUNDATION: &[MaterialRate] = &[
    MaterialRate::area("cement", "Cement", 12.0, 9.0),
    MaterialRate::area("rebar", "Rebar", 0.75, 10.0),
    MaterialRate::area("gravel", "Gravel", 20.0, 20.0),
    MaterialRate::area("quarry_stone", "Quarry Stones", 30.0, 28.0),
    MaterialRate::area("dpc", "DPC", 10.0, 60.0),
    MaterialRate::area("brick_force", "Brick Force", 20.0, 150.0),
    MaterialRate::area("bricks", "Bricks", 0.20, 0.20),
    MaterialRate::area("anchor_bolts", "Anchor Bolts", 0.50, 8.0),
];

pub const WALLS: &[MaterialRate] = &[
    MaterialRate::area("pit_sand", "Pit Sand", 20.0, 45.0),
    MaterialRate::area("river_sand", "River Sand", 20.0, 50.0),
    MaterialRate::area("cement", "Cement", 13.0, 15.0),
    MaterialRate::area("bricks", "Bricks", 0.20, 0.15),
    MaterialRate::area("siding_nails", "Siding Nails", 0.50, 100.0),
    MaterialRate::openings("air_vents", "Air Vents", 3.0, 2.0),
];

pub const ROOFING: &[MaterialRate] = &[
    MaterialRate::area("asbestos", "Asbestos Sheets", 20.0, 30.0),
    MaterialRate::area("roof_decking", "Roof Decking", 25.0, 70.0),
    MaterialRate::area("ridges", "Ridges", 5.0, 50.0),
    MaterialRate::area("roofing_nails", "Roofing Nails", 10.0, 200.0),
];

// Window frames are priced per frame (28) with two frames per opening.
pub const WINDOWS_AND_DOORS: &[MaterialRate] = &[
    MaterialRate::openings("windows", "Window Panels", 9.0, 4.0),
    MaterialRate::openings("doors", "Doors", 60.0, 1.0),
    MaterialRate::openings("door_frames", "Door Frames", 54.0, 1.0),
    MaterialRate::fixed("sliding_glass_doors", "Sliding Glass Doors", 200.0),
    MaterialRate::openings("window_frame", "Window Frames", 28.0, 2.0),
];

pub const INTERIOR_FINISHING: &[MaterialRate] = &[
    MaterialRate::area("tiles", "Tiles", 1.0, 10.0).with_quantity(QuantityRule::CostAsQuantity),
    MaterialRate::area("interior_paint", "Interior Paint", 25.0, 100.0),
    MaterialRate::area("ceiling", "Ceiling", 11.0, 10.0),
];
