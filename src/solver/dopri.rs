//! Dormand-Prince 4(5) stepper with dense output.

use super::{OdeSystem, SolverError, SolverOptions};

// Dormand-Prince tableau
const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// 5th-order weights (advancing solution, local extrapolation)
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// 4th-order embedded weights
const BE1: f64 = 5179.0 / 57600.0;
const BE3: f64 = 7571.0 / 16695.0;
const BE4: f64 = 393.0 / 640.0;
const BE5: f64 = -92097.0 / 339200.0;
const BE6: f64 = 187.0 / 2100.0;
const BE7: f64 = 1.0 / 40.0;

// Error estimate = y5 - y4
const E1: f64 = B1 - BE1;
const E3: f64 = B3 - BE3;
const E4: f64 = B4 - BE4;
const E5: f64 = B5 - BE5;
const E6: f64 = B6 - BE6;
const E7: f64 = -BE7;

// Dense-output coefficients (Hairer's order-4 continuous extension)
const D1: f64 = -12715105075.0 / 11282082432.0;
const D3: f64 = 87487479700.0 / 32700410799.0;
const D4: f64 = -10690763975.0 / 1880347072.0;
const D5: f64 = 701980252875.0 / 199316789632.0;
const D6: f64 = -1453857185.0 / 822651844.0;
const D7: f64 = 69997945.0 / 29380423.0;

// Step-size controller
const SAFETY: f64 = 0.9;
const FACTOR_MIN: f64 = 0.2;
const FACTOR_MAX: f64 = 5.0;

/// Adaptive Dormand-Prince 4(5) integrator.
///
/// Scratch buffers are reused across steps and across calls; one instance
/// serves any number of sequential integrations.
pub struct Dopri45 {
    /// Configuration
    pub options: SolverOptions,
    /// Accepted steps in the most recent integration
    pub accepted_steps: u64,
    /// Rejected steps in the most recent integration
    pub rejected_steps: u64,
    // Stage derivatives
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
    k5: Vec<f64>,
    k6: Vec<f64>,
    k7: Vec<f64>,
    // Stage state and step result
    y_tmp: Vec<f64>,
    y_new: Vec<f64>,
    // Continuous-extension coefficients for the current step
    rcont: [Vec<f64>; 5],
}

impl Default for Dopri45 {
    fn default() -> Self {
        Self::new(SolverOptions::default())
    }
}

impl Dopri45 {
    /// Create an integrator with the given options.
    pub fn new(options: SolverOptions) -> Self {
        Self {
            options,
            accepted_steps: 0,
            rejected_steps: 0,
            k1: Vec::new(),
            k2: Vec::new(),
            k3: Vec::new(),
            k4: Vec::new(),
            k5: Vec::new(),
            k6: Vec::new(),
            k7: Vec::new(),
            y_tmp: Vec::new(),
            y_new: Vec::new(),
            rcont: [Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new()],
        }
    }

    fn resize(&mut self, n: usize) {
        for buf in [
            &mut self.k1,
            &mut self.k2,
            &mut self.k3,
            &mut self.k4,
            &mut self.k5,
            &mut self.k6,
            &mut self.k7,
            &mut self.y_tmp,
            &mut self.y_new,
        ] {
            buf.resize(n, 0.0);
        }
        for buf in &mut self.rcont {
            buf.resize(n, 0.0);
        }
    }

    /// Integrate `sys` from `t0` to `tf` and sample the solution at every
    /// time in `t_eval`.
    ///
    /// `t_eval` must be strictly increasing and lie within `[t0, tf]`; it
    /// is the caller's output grid, not the solver's native step sequence.
    /// Sampled states come from the order-4 continuous extension of each
    /// accepted step. Returns one state vector per requested time.
    pub fn integrate<S: OdeSystem>(
        &mut self,
        sys: &S,
        y0: &[f64],
        t0: f64,
        tf: f64,
        t_eval: &[f64],
    ) -> Result<Vec<Vec<f64>>, SolverError> {
        self.options.validate()?;
        let n = sys.ndim();
        if y0.len() != n {
            return Err(SolverError::DimensionMismatch {
                got: y0.len(),
                expected: n,
            });
        }
        if !t0.is_finite() || !tf.is_finite() || tf <= t0 {
            return Err(SolverError::InvalidRequest(format!(
                "integration span [{}, {}] must be finite and non-empty",
                t0, tf
            )));
        }
        if t_eval.is_empty() {
            return Err(SolverError::InvalidRequest("output grid is empty".into()));
        }
        if t_eval.windows(2).any(|w| w[1] <= w[0]) {
            return Err(SolverError::InvalidRequest(
                "output grid must be strictly increasing".into(),
            ));
        }
        if t_eval[0] < t0 || *t_eval.last().unwrap() > tf {
            return Err(SolverError::InvalidRequest(format!(
                "output grid must lie within [{}, {}]",
                t0, tf
            )));
        }

        self.resize(n);
        self.accepted_steps = 0;
        self.rejected_steps = 0;

        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(t_eval.len());
        let mut out_idx = 0;
        while out_idx < t_eval.len() && t_eval[out_idx] <= t0 {
            rows.push(y0.to_vec());
            out_idx += 1;
        }

        let mut t = t0;
        let mut y = y0.to_vec();
        let mut h = self.options.initial_step(tf - t0);

        sys.rhs(t, &y, &mut self.k1);

        let mut nsteps = 0usize;
        while out_idx < t_eval.len() {
            if nsteps >= self.options.max_steps {
                return Err(SolverError::MaxStepsExceeded {
                    max_steps: self.options.max_steps,
                    t,
                });
            }
            nsteps += 1;

            let last = t + h >= tf;
            let h_step = if last { tf - t } else { h };

            let err = self.try_step(sys, t, &y, h_step);

            if err <= 1.0 {
                self.accepted_steps += 1;
                let t_new = if last { tf } else { t + h_step };

                if out_idx < t_eval.len() && t_eval[out_idx] <= t_new {
                    self.prepare_dense_output(&y, h_step);
                    while out_idx < t_eval.len() && t_eval[out_idx] <= t_new {
                        let theta = ((t_eval[out_idx] - t) / h_step).clamp(0.0, 1.0);
                        rows.push(self.interpolate(theta));
                        out_idx += 1;
                    }
                }

                y.copy_from_slice(&self.y_new);
                std::mem::swap(&mut self.k1, &mut self.k7); // FSAL
                t = t_new;
            } else {
                self.rejected_steps += 1;
                if h_step <= self.options.h_min {
                    return Err(SolverError::StepSizeUnderflow { t });
                }
            }

            let factor = if err == 0.0 {
                FACTOR_MAX
            } else {
                (SAFETY * err.powf(-0.2)).clamp(FACTOR_MIN, FACTOR_MAX)
            };
            h = (h_step * factor)
                .max(self.options.h_min)
                .min(self.options.h_max);
        }

        Ok(rows)
    }

    /// Attempt one step of size `h` from `(t, y)`.
    ///
    /// Fills `y_new` with the 5th-order result and `k2..k7` with stage
    /// derivatives. Returns the scaled error norm; `<= 1.0` means accept.
    fn try_step<S: OdeSystem>(&mut self, sys: &S, t: f64, y: &[f64], h: f64) -> f64 {
        let n = y.len();

        for i in 0..n {
            self.y_tmp[i] = y[i] + h * A21 * self.k1[i];
        }
        sys.rhs(t + h / 5.0, &self.y_tmp, &mut self.k2);

        for i in 0..n {
            self.y_tmp[i] = y[i] + h * (A31 * self.k1[i] + A32 * self.k2[i]);
        }
        sys.rhs(t + 3.0 * h / 10.0, &self.y_tmp, &mut self.k3);

        for i in 0..n {
            self.y_tmp[i] = y[i] + h * (A41 * self.k1[i] + A42 * self.k2[i] + A43 * self.k3[i]);
        }
        sys.rhs(t + 4.0 * h / 5.0, &self.y_tmp, &mut self.k4);

        for i in 0..n {
            self.y_tmp[i] = y[i]
                + h * (A51 * self.k1[i] + A52 * self.k2[i] + A53 * self.k3[i] + A54 * self.k4[i]);
        }
        sys.rhs(t + 8.0 * h / 9.0, &self.y_tmp, &mut self.k5);

        for i in 0..n {
            self.y_tmp[i] = y[i]
                + h * (A61 * self.k1[i]
                    + A62 * self.k2[i]
                    + A63 * self.k3[i]
                    + A64 * self.k4[i]
                    + A65 * self.k5[i]);
        }
        sys.rhs(t + h, &self.y_tmp, &mut self.k6);

        for i in 0..n {
            self.y_new[i] = y[i]
                + h * (B1 * self.k1[i]
                    + B3 * self.k3[i]
                    + B4 * self.k4[i]
                    + B5 * self.k5[i]
                    + B6 * self.k6[i]);
        }

        // FSAL stage: derivative at the step end
        sys.rhs(t + h, &self.y_new, &mut self.k7);

        let mut err_norm = 0.0;
        for i in 0..n {
            let ei = h
                * (E1 * self.k1[i]
                    + E3 * self.k3[i]
                    + E4 * self.k4[i]
                    + E5 * self.k5[i]
                    + E6 * self.k6[i]
                    + E7 * self.k7[i]);
            let scale =
                self.options.atol + self.options.rtol * y[i].abs().max(self.y_new[i].abs());
            err_norm += (ei / scale) * (ei / scale);
        }
        err_norm = (err_norm / n as f64).sqrt();

        // A non-finite norm (diverging RHS) must force a rejection, not
        // poison the controller.
        if err_norm.is_nan() {
            f64::INFINITY
        } else {
            err_norm
        }
    }

    /// Build the continuous-extension coefficients for the step just taken
    /// from `y_old` with size `h`.
    fn prepare_dense_output(&mut self, y_old: &[f64], h: f64) {
        let n = y_old.len();
        for i in 0..n {
            let ydiff = self.y_new[i] - y_old[i];
            let bspl = h * self.k1[i] - ydiff;
            self.rcont[0][i] = y_old[i];
            self.rcont[1][i] = ydiff;
            self.rcont[2][i] = bspl;
            self.rcont[3][i] = ydiff - h * self.k7[i] - bspl;
            self.rcont[4][i] = h
                * (D1 * self.k1[i]
                    + D3 * self.k3[i]
                    + D4 * self.k4[i]
                    + D5 * self.k5[i]
                    + D6 * self.k6[i]
                    + D7 * self.k7[i]);
        }
    }

    /// Evaluate the continuous extension at fraction `theta` of the step.
    fn interpolate(&self, theta: f64) -> Vec<f64> {
        let omt = 1.0 - theta;
        self.rcont[0]
            .iter()
            .zip(&self.rcont[1])
            .zip(&self.rcont[2])
            .zip(&self.rcont[3])
            .zip(&self.rcont[4])
            .map(|((((&c0, &c1), &c2), &c3), &c4)| {
                c0 + theta * (c1 + omt * (c2 + theta * (c3 + omt * c4)))
            })
            .collect()
    }
}
