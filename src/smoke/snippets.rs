//! Python snippets run by the smoke tester.
//!
//! Each snippet prints its results as `key=value` lines for
//! [`SnippetReport`](super::report::SnippetReport). Inputs such as the plot
//! path travel as arguments, never spliced into the code.

/// NumPy array and mean.
pub const ARRAY_MEAN: &str = "\
import numpy as np
np.set_printoptions(linewidth=1_000_000)
arr = np.array([1, 2, 3, 4, 5])
print(f\"array={arr}\")
print(f\"mean={np.mean(arr)}\")
";

/// SciPy normal fit over the same array.
pub const NORM_FIT: &str = "\
import numpy as np
import scipy.stats as stats
mean, std = stats.norm.fit(np.array([1, 2, 3, 4, 5]))
print(f\"mean={mean:.2f}\")
print(f\"std={std:.2f}\")
";

/// Matplotlib line plot saved headless. Arguments: path, dpi.
pub const SAVE_PLOT: &str = "\
import sys
import matplotlib
matplotlib.use(\"Agg\")
import matplotlib.pyplot as plt
path, dpi = sys.argv[1], int(sys.argv[2])
plt.figure(figsize=(8, 6))
plt.plot([1, 2, 3, 4, 5], \"o-\", label=\"Data\")
plt.title(\"Test Plot\")
plt.xlabel(\"Index\")
plt.ylabel(\"Value\")
plt.legend()
plt.grid(True, alpha=0.3)
plt.savefig(path, dpi=dpi, bbox_inches=\"tight\")
plt.close()
print(f\"saved={path}\")
";

/// SciPy minimization of (x0 - 1)^2 + (x1 - 2)^2 from the origin.
pub const MINIMIZE: &str = "\
import numpy as np
import scipy.optimize as optimize
np.set_printoptions(linewidth=1_000_000)
result = optimize.minimize(lambda x: (x[0] - 1) ** 2 + (x[1] - 2) ** 2, [0, 0])
print(f\"x={result.x}\")
";

/// NumPy eigenvalues of a random 3x3 matrix.
pub const EIGENVALUES: &str = "\
import numpy as np
np.set_printoptions(linewidth=1_000_000)
print(f\"eigenvalues={np.linalg.eigvals(np.random.rand(3, 3))}\")
";
