use drape::{Particle, SpatialGrid, Vec2};

const CELL: f32 = 40.0;

fn at(x: f32, y: f32) -> Particle<f32> {
    Particle::new(Vec2::new(x, y))
}

#[test]
fn every_inbounds_particle_lands_in_exactly_one_matching_bucket() {
    let particles = [
        at(0.0, 0.0),
        at(39.9, 39.9),
        at(40.0, 40.0),
        at(399.0, 10.0),
        at(123.4, 287.6),
        at(250.0, 250.0),
    ];
    let viewport = Vec2::new(400.0, 300.0);
    let mut grid = SpatialGrid::new(CELL);
    assert_eq!(grid.rebuild(viewport, &particles), particles.len());

    for (i, p) in particles.iter().enumerate() {
        let cx = (p.pos.x / CELL).floor() as usize;
        let cy = (p.pos.y / CELL).floor() as usize;

        let mut found = Vec::new();
        for gy in 0..grid.rows() {
            for gx in 0..grid.columns() {
                if grid.bucket(gx, gy).contains(&i) {
                    found.push(gx + gy * grid.columns());
                }
            }
        }
        assert_eq!(found, vec![cx + cy * grid.columns()], "particle {} at {:?}", i, p.pos);
    }
}

#[test]
fn out_of_viewport_particles_are_dropped() {
    let particles = [at(-1.0, 10.0), at(10.0, 10.0), at(10.0, 320.0), at(401.0, 10.0)];
    let mut grid = SpatialGrid::new(CELL);
    assert_eq!(grid.rebuild(Vec2::new(400.0, 300.0), &particles), 1);
    assert_eq!(grid.bucket(0, 0), &[1]);
    assert_eq!(grid.len(), 1);
}

#[test]
fn query_finds_particle_across_positive_cell_boundary() {
    // Query sits in cell (0, 0); the particle is in cell (1, 0), 2 units away.
    let particles = [at(41.0, 20.0)];
    let mut grid = SpatialGrid::new(CELL);
    grid.rebuild(Vec2::new(400.0, 300.0), &particles);

    assert_eq!(grid.particle_near(Vec2::new(39.0, 20.0), 150.0, &particles), Some(0));
}

#[test]
fn query_finds_particle_across_negative_cell_boundary() {
    let particles = [at(79.0, 79.0)];
    let mut grid = SpatialGrid::new(CELL);
    grid.rebuild(Vec2::new(400.0, 300.0), &particles);

    assert_eq!(grid.particle_near(Vec2::new(81.0, 81.0), 150.0, &particles), Some(0));
}

#[test]
fn query_returns_first_hit_not_closest() {
    // Index 0 is 0.5 away in cell (1, 0); index 1 is 5.5 away in cell (0, 0).
    // Column 0 is scanned first, so the farther particle wins.
    let particles = [at(41.0, 20.0), at(35.0, 20.0)];
    let mut grid = SpatialGrid::new(CELL);
    grid.rebuild(Vec2::new(400.0, 300.0), &particles);

    assert_eq!(grid.particle_near(Vec2::new(40.5, 20.0), 150.0, &particles), Some(1));
}

#[test]
fn threshold_is_strict_squared_distance() {
    let particles = [at(110.0, 100.0)];
    let mut grid = SpatialGrid::new(CELL);
    grid.rebuild(Vec2::new(400.0, 300.0), &particles);

    let query = Vec2::new(100.0, 100.0);
    assert_eq!(grid.particle_near(query, 100.0, &particles), None);
    assert_eq!(grid.particle_near(query, 100.5, &particles), Some(0));
}

#[test]
fn nothing_nearby_is_none() {
    let particles = [at(10.0, 10.0)];
    let mut grid = SpatialGrid::new(CELL);
    grid.rebuild(Vec2::new(400.0, 300.0), &particles);

    assert_eq!(grid.particle_near(Vec2::new(300.0, 200.0), 150.0, &particles), None);
    assert_eq!(grid.particle_near(Vec2::new(-5000.0, 1e9), 150.0, &particles), None);
}

#[test]
fn rebuild_forgets_previous_frame() {
    let mut particles = [at(10.0, 10.0)];
    let mut grid = SpatialGrid::new(CELL);
    grid.rebuild(Vec2::new(400.0, 300.0), &particles);

    particles[0].pos = Vec2::new(210.0, 210.0);
    grid.rebuild(Vec2::new(400.0, 300.0), &particles);

    assert!(grid.bucket(0, 0).is_empty());
    assert_eq!(grid.bucket(5, 5), &[0]);
}

#[test]
fn empty_grid_query_is_none() {
    let grid: SpatialGrid<f32> = SpatialGrid::new(CELL);
    assert!(grid.is_empty());
    assert_eq!(grid.particle_near(Vec2::new(10.0, 10.0), 150.0, &[]), None);
}
