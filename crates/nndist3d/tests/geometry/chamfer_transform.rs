use na::Vector3;
use nndist3d::voxels::chamfer::{chamfer_length, STEP_AXIAL};
use nndist3d::voxels::{DistanceField, OccupancyGrid};
use oorandom::Rand64;

fn random_occupancy(rng: &mut Rand64, dims: Vector3<usize>, num_occupied: usize) -> OccupancyGrid {
    let mut occupancy = OccupancyGrid::new(dims, 0.1).unwrap();

    for _ in 0..num_occupied {
        occupancy.occupy(
            rng.rand_range(0..dims.x as u64) as usize,
            rng.rand_range(0..dims.y as u64) as usize,
            rng.rand_range(0..dims.z as u64) as usize,
        );
    }

    occupancy
}

#[test]
fn chamfer_transform_matches_brute_force() {
    let mut rng = Rand64::new(0x5eed);
    let all_dims = [
        Vector3::new(7, 5, 4),
        Vector3::new(1, 9, 3),
        Vector3::new(6, 6, 6),
        Vector3::new(11, 2, 8),
    ];

    for dims in all_dims {
        for num_occupied in [1, 3, 8] {
            let occupancy = random_occupancy(&mut rng, dims, num_occupied);
            let field = DistanceField::chamfer(&occupancy).unwrap();

            let mut occupied = vec![];
            for z in 0..dims.z {
                for y in 0..dims.y {
                    for x in 0..dims.x {
                        if occupancy.is_occupied(x, y, z) {
                            occupied.push((x, y, z));
                        }
                    }
                }
            }

            for z in 0..dims.z {
                for y in 0..dims.y {
                    for x in 0..dims.x {
                        let expected = occupied
                            .iter()
                            .map(|(ox, oy, oz)| {
                                chamfer_length(x.abs_diff(*ox), y.abs_diff(*oy), z.abs_diff(*oz))
                            })
                            .min()
                            .unwrap();

                        assert_eq!(
                            field.value(x, y, z),
                            expected,
                            "voxel ({x}, {y}, {z}) of a {dims:?} grid"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn chamfer_values_are_zero_exactly_on_occupied_voxels() {
    let mut rng = Rand64::new(42);
    let occupancy = random_occupancy(&mut rng, Vector3::new(9, 8, 7), 12);
    let field = DistanceField::chamfer(&occupancy).unwrap();

    for (id, value) in field.values().iter().enumerate() {
        let key = field.grid().voxel_key(id);

        if occupancy.is_occupied(key.x, key.y, key.z) {
            assert_eq!(*value, 0);
        } else {
            assert!(*value >= STEP_AXIAL && *value <= field.infinity());
        }
    }
}
