//! Simulation constants and tuning parameters.
//!
//! Distances are world units, angles radians, times milliseconds.
//! Rates are per frame: the simulation has no dt scaling.

use std::f32::consts::FRAC_PI_4;

/// Nominal frame rate (Hz) used by the app loop and default config.
pub const FRAME_RATE: u32 = 60;

/// Milliseconds per frame at the nominal rate.
pub const FRAME_MS: f64 = 1000.0 / FRAME_RATE as f64;

// --- World ---

/// Projectiles farther than this from the origin are culled.
pub const WORLD_RADIUS: f32 = 2000.0;

/// Altitude below which aircraft hit the ground.
pub const GROUND_LEVEL: f32 = 0.0;

// --- Player flight model ---

/// Player spawn point.
pub const PLAYER_SPAWN_ALTITUDE: f32 = 1.0;

/// Yaw change per frame while a turn key is held.
pub const PLAYER_YAW_RATE: f32 = 0.03;

/// Roll change per frame while turning.
pub const PLAYER_ROLL_RATE: f32 = 0.025;

/// Maximum bank angle while turning.
pub const PLAYER_ROLL_LIMIT: f32 = 0.5;

/// Roll multiplier per frame without turn input (auto-level).
pub const PLAYER_ROLL_DAMPING: f32 = 0.9;

/// Pitch change per frame while up/down is held.
pub const PLAYER_PITCH_RATE: f32 = 0.02;

/// Pitch is hard-clamped to +/- this value.
pub const PLAYER_PITCH_LIMIT: f32 = FRAC_PI_4;

/// Distance flown along the nose each frame.
pub const PLAYER_SPEED: f32 = 0.5;

/// Minimum time between player shots.
pub const PLAYER_FIRE_COOLDOWN_MS: f64 = 200.0;

// --- Follow camera ---

/// Camera offset behind and above the player, in the player's frame.
pub const CAMERA_OFFSET: [f32; 3] = [0.0, 6.0, 18.0];

/// Fraction of the remaining distance the camera closes each frame.
pub const CAMERA_LERP: f32 = 0.1;

/// Camera position before the first frame.
pub const CAMERA_START: [f32; 3] = [0.0, 5.0, 20.0];

// --- Enemies ---

/// Default number of enemies in the session spawn batch.
pub const DEFAULT_ENEMY_COUNT: usize = 7;

/// Pursuit gain along world X (per frame, on the unit ground-plane direction).
pub const ENEMY_CHASE_GAIN_X: f32 = 0.25;

/// Pursuit gain along world Z. Larger than X for a forward-biased chase.
pub const ENEMY_CHASE_GAIN_Z: f32 = 0.4;

/// Speed along +Z when there is no player to chase.
pub const ENEMY_CRUISE_SPEED: f32 = 0.4;

/// Lower edge of the altitude band, relative to the player.
pub const ENEMY_ALTITUDE_BAND_LOW: f32 = 5.0;

/// Upper edge of the altitude band, relative to the player.
pub const ENEMY_ALTITUDE_BAND_HIGH: f32 = 10.0;

/// Vertical creep per frame when outside the band.
pub const ENEMY_CLIMB_RATE: f32 = 0.1;

/// Amplitude of the lateral dodge.
pub const ENEMY_JITTER_AMPLITUDE: f32 = 0.2;

/// Angular frequency of the dodge per millisecond of session time.
pub const ENEMY_JITTER_FREQUENCY: f64 = 0.001;

/// Enemies this far behind the player (along +Z) leave the fight.
pub const ENEMY_BEHIND_CULL_DISTANCE: f32 = 50.0;

/// Enemy spawn box.
pub const ENEMY_SPAWN_HALF_WIDTH: f32 = 50.0;
pub const ENEMY_SPAWN_MIN_ALTITUDE: f32 = 15.0;
pub const ENEMY_SPAWN_ALTITUDE_SPREAD: f32 = 20.0;
pub const ENEMY_SPAWN_MIN_RANGE: f32 = 100.0;
pub const ENEMY_SPAWN_RANGE_SPREAD: f32 = 200.0;

// --- Enemy gunnery ---

/// Shared cooldown between enemy volleys.
pub const ENEMY_FIRE_COOLDOWN_MS: f64 = 1200.0;

/// Enemies only shoot at a player closer than this.
pub const ENEMY_ENGAGEMENT_RANGE: f32 = 200.0;

/// Minimum forward . direction-to-player for a shot (about 45 degrees).
pub const ENEMY_FIRE_CONE_DOT: f32 = 0.7;

/// Default probability an eligible enemy fires in a volley.
pub const DEFAULT_ENEMY_FIRE_CHANCE: f64 = 0.5;

// --- Projectiles ---

/// Player bullet travel per frame.
pub const PLAYER_BULLET_SPEED: f32 = 1.5;

/// Enemy bullet travel per frame.
pub const ENEMY_BULLET_SPEED: f32 = 1.2;

/// Bullet hit radius against aircraft.
pub const BULLET_HIT_RADIUS: f32 = 2.0;

// --- Collisions ---

/// Two enemies closer than this destroy each other.
pub const ENEMY_COLLISION_RADIUS: f32 = 3.0;

/// Added to half a building's width to get its collision radius.
pub const BUILDING_COLLISION_MARGIN: f32 = 2.0;

// --- Buildings ---

/// Default number of buildings scattered over the city.
pub const DEFAULT_BUILDING_COUNT: usize = 30;

pub const BUILDING_MIN_WIDTH: f32 = 8.0;
pub const BUILDING_WIDTH_SPREAD: f32 = 12.0;
pub const BUILDING_MIN_HEIGHT: f32 = 30.0;
pub const BUILDING_HEIGHT_SPREAD: f32 = 60.0;

/// Buildings are scattered over a square of this half-extent.
pub const CITY_HALF_EXTENT: f32 = 900.0;

/// Height of the visual ground slab the buildings stand on.
pub const BUILDING_BASE_Y: f32 = -1.0;

// --- Smoke trail ---

/// Smoke spawn offset behind the player, in the player's frame.
pub const SMOKE_OFFSET: [f32; 3] = [0.0, 0.0, 3.0];

/// Puffs are drawn at a fixed size and only fade.
pub const SMOKE_RADIUS: f32 = 0.7;

pub const SMOKE_LIFE_DECAY: f32 = 0.01;
pub const SMOKE_RISE: f32 = 0.01;

// --- Explosions ---

/// Particles per explosion burst.
pub const EXPLOSION_PARTICLES: usize = 20;

/// Spread of the random horizontal velocity (centered on zero).
pub const EXPLOSION_HORIZONTAL_SPREAD: f32 = 2.0;

/// Upper bound of the random upward velocity.
pub const EXPLOSION_VERTICAL_SPREAD: f32 = 2.0;

pub const EXPLOSION_MIN_RADIUS: f32 = 0.2;
pub const EXPLOSION_RADIUS_SPREAD: f32 = 0.5;

/// Initial particle opacity.
pub const EXPLOSION_START_OPACITY: f32 = 0.8;

/// Fraction of the velocity applied per frame.
pub const EXPLOSION_VELOCITY_DAMPING: f32 = 0.2;

pub const EXPLOSION_SCALE_GROWTH: f32 = 1.05;
pub const EXPLOSION_OPACITY_DECAY: f32 = 0.93;
pub const EXPLOSION_LIFE_DECAY: f32 = 0.02;

/// Particles fainter than this are removed.
pub const EXPLOSION_VISIBILITY_FLOOR: f32 = 0.05;
