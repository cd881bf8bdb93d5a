// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Secret references and the stores that resolve them.
mod secret_store;

pub use self::secret_store::{KubeSecrets, SecretData, SecretKeyRef, SecretStore};
