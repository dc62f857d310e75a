use crate::city::Coordinates;
use clap::ValueEnum;

/// Great-circle distance in kilometres between two points.
pub trait DistanceProvider {
    fn distance_km(&self, from: Coordinates, to: Coordinates) -> f64;
}

const EARTH_RADIUS_KM: f64 = 6371.0;

// WGS-84
const SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;
const FLATTENING: f64 = 1.0 / 298.257_223_563;
const MAX_ITERATIONS: usize = 200;
const CONVERGENCE: f64 = 1e-12;

/// Spherical earth, haversine formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceProvider for Haversine {
    fn distance_km(&self, from: Coordinates, to: Coordinates) -> f64 {
        let d_lat = (to.latitude - from.latitude).to_radians();
        let d_lon = (to.longitude - from.longitude).to_radians();
        let lat1 = from.latitude.to_radians();
        let lat2 = to.latitude.to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// Ellipsoidal distance on WGS-84 (Vincenty's inverse formula). Falls back to
/// haversine for nearly antipodal points where the iteration does not converge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geodesic;

impl DistanceProvider for Geodesic {
    fn distance_km(&self, from: Coordinates, to: Coordinates) -> f64 {
        let a = SEMI_MAJOR_AXIS_M;
        let f = FLATTENING;
        let b = (1.0 - f) * a;

        let l = (to.longitude - from.longitude).to_radians();
        let u1 = ((1.0 - f) * from.latitude.to_radians().tan()).atan();
        let u2 = ((1.0 - f) * to.latitude.to_radians().tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        for _ in 0..MAX_ITERATIONS {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();
            if sin_sigma == 0.0 {
                return 0.0;
            }
            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            // equatorial line
            let cos_2sigma_m = if cos_sq_alpha != 0.0 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            } else {
                0.0
            };
            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
            let previous = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

            if (lambda - previous).abs() < CONVERGENCE {
                let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
                let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
                let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
                let delta_sigma = big_b
                    * sin_sigma
                    * (cos_2sigma_m
                        + big_b / 4.0
                            * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                                - big_b / 6.0
                                    * cos_2sigma_m
                                    * (-3.0 + 4.0 * sin_sigma.powi(2))
                                    * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));
                return b * big_a * (sigma - delta_sigma) / 1000.0;
            }
        }

        tracing::debug!("geodesic did not converge, using haversine");
        Haversine.distance_km(from, to)
    }
}

/// Distance model picked on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DistanceModel {
    #[default]
    Geodesic,
    Haversine,
}

impl DistanceProvider for DistanceModel {
    fn distance_km(&self, from: Coordinates, to: Coordinates) -> f64 {
        match self {
            DistanceModel::Geodesic => Geodesic.distance_km(from, to),
            DistanceModel::Haversine => Haversine.distance_km(from, to),
        }
    }
}
