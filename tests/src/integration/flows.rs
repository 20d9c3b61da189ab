//! # Integration Test Flows
//!
//! Block validation and remote sealing working together:
//!
//! 1. **Mine → seal → validate**: a work package is solved off-process, the
//!    sealed block passes both validation stages and extends the chain
//! 2. **Stale work**: solutions for superseded packages never reach import
//! 3. **Missing state**: a parent whose state was pruned defers import
//! 4. **Uncles**: sibling headers referenced by a later block

#[cfg(test)]
mod tests {
    use crate::fixtures::{BlockBuilder, FixedState, ForkedState, TestNode};
    use ac_01_block_validation::{
        BlockValidationApi, BlockValidationError, ChainConfig, ErrorClass, GasBounds,
        GasLimitCalculator,
    };
    use ac_02_remote_work::{RemoteWorkConfig, RemoteWorkCoordinator, SubmitOutcome};
    use shared_types::{Block, EngineError, H256};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Easy enough that a few hundred nonces always find a solution.
    const DIFFICULTY: u64 = 32;

    fn coordinator(node: &TestNode) -> (RemoteWorkCoordinator, mpsc::Receiver<Block>) {
        RemoteWorkCoordinator::spawn(RemoteWorkConfig::default(), Arc::clone(&node.engine))
            .expect("default config is valid")
    }

    /// Push `block`, solve its package and return the sealed result.
    async fn mine(
        node: &TestNode,
        remote: &RemoteWorkCoordinator,
        sealed: &mut mpsc::Receiver<Block>,
        block: Block,
    ) -> Block {
        remote.push_work(block, H256::zero()).await.unwrap();
        let work = remote.get_work().await.unwrap();
        let nonce = node.engine.solve(&work, 0, 100_000).expect("solution exists");

        assert_eq!(
            remote.submit_work(nonce, work.pow_hash).await,
            Ok(SubmitOutcome::Accepted)
        );
        timeout(Duration::from_secs(1), sealed.recv())
            .await
            .expect("sealed block delivered")
            .expect("results channel open")
    }

    // =============================================================================
    // INTEGRATION TESTS: MINE → SEAL → VALIDATE
    // =============================================================================

    #[tokio::test]
    async fn test_sealed_block_passes_both_stages() {
        let node = TestNode::new(DIFFICULTY);
        let (remote, mut sealed) = coordinator(&node);

        let root = H256::repeat_byte(0x11);
        let (block, receipts) = BlockBuilder::new()
            .transfers(4)
            .state_root(root)
            .build_on(&node.genesis);
        let seal_hash = block.header.seal_hash();

        let sealed_block = mine(&node, &remote, &mut sealed, block).await;
        assert_eq!(sealed_block.header.seal_hash(), seal_hash);

        node.validator.validate_body(&sealed_block).unwrap();
        node.validator
            .validate_state(&sealed_block, &FixedState(root), &receipts, sealed_block.gas_used())
            .unwrap();
        node.chain.insert_block(&sealed_block);

        // Imported once, the same block is now known.
        assert!(matches!(
            node.validator.validate_body(&sealed_block),
            Err(BlockValidationError::KnownBlock { number: 1, .. })
        ));
    }

    #[tokio::test]
    async fn test_chain_of_sealed_blocks() {
        let node = TestNode::new(DIFFICULTY);
        let (remote, mut sealed) = coordinator(&node);

        let mut parent = node.genesis.clone();
        for height in 1..=5u64 {
            let root = H256::from_low_u64_be(height);
            let (block, receipts) = BlockBuilder::new()
                .transfers(height)
                .state_root(root)
                .build_on(&parent);
            let block = mine(&node, &remote, &mut sealed, block).await;

            node.validator.validate_body(&block).unwrap();
            node.validator
                .validate_state(&block, &FixedState(root), &receipts, block.gas_used())
                .unwrap();
            node.chain.insert_block(&block);
            parent = block.header;
        }
        assert_eq!(node.chain.len(), 6);
        remote.shutdown();
    }

    #[tokio::test]
    async fn test_tampered_sealed_block_rejected() {
        let node = TestNode::new(DIFFICULTY);
        let (remote, mut sealed) = coordinator(&node);
        let (block, _) = BlockBuilder::new().transfers(2).build_on(&node.genesis);

        let mut sealed_block = mine(&node, &remote, &mut sealed, block).await;
        sealed_block.transactions.swap(0, 1);

        let err = node.validator.validate_body(&sealed_block).unwrap_err();
        assert!(matches!(err, BlockValidationError::TxRootMismatch { .. }));
        assert_eq!(err.class(), ErrorClass::StructuralMismatch);
    }

    #[tokio::test]
    async fn test_wrong_execution_output_rejected() {
        let node = TestNode::new(DIFFICULTY);
        let (remote, mut sealed) = coordinator(&node);
        let (block, mut receipts) = BlockBuilder::new()
            .transfers(3)
            .state_root(H256::repeat_byte(1))
            .build_on(&node.genesis);
        let block = mine(&node, &remote, &mut sealed, block).await;
        node.validator.validate_body(&block).unwrap();

        // Local execution disagrees on the last receipt's status.
        receipts[2].status = shared_types::ReceiptStatus::Failed;
        assert!(matches!(
            node.validator.validate_state(
                &block,
                &FixedState(H256::repeat_byte(1)),
                &receipts,
                block.gas_used()
            ),
            Err(BlockValidationError::ReceiptRootMismatch { .. })
        ));
    }

    // =============================================================================
    // INTEGRATION TESTS: STALE WORK
    // =============================================================================

    #[tokio::test]
    async fn test_superseded_solution_never_sealed() {
        let node = TestNode::new(DIFFICULTY);
        let (remote, mut sealed) = coordinator(&node);

        let (first, _) = BlockBuilder::new().tag(1).build_on(&node.genesis);
        let (second, _) = BlockBuilder::new().tag(2).build_on(&node.genesis);

        let old = remote.push_work(first, H256::zero()).await.unwrap();
        remote.push_work(second, H256::zero()).await.unwrap();

        let nonce = node.engine.solve(&old, 0, 100_000).unwrap();
        assert_eq!(
            remote.submit_work(nonce, old.pow_hash).await,
            Ok(SubmitOutcome::Stale)
        );
        assert!(sealed.try_recv().is_err());

        let current = remote.get_work().await.unwrap();
        let nonce = node.engine.solve(&current, 0, 100_000).unwrap();
        assert_eq!(
            remote.submit_work(nonce, current.pow_hash).await,
            Ok(SubmitOutcome::Accepted)
        );
        let block = sealed.recv().await.unwrap();
        assert_eq!(block.header.extra_data, vec![2]);
    }

    // =============================================================================
    // INTEGRATION TESTS: MISSING STATE
    // =============================================================================

    #[tokio::test]
    async fn test_pruned_parent_defers_import() {
        let node = TestNode::new(DIFFICULTY);
        let (remote, mut sealed) = coordinator(&node);

        let (parent, _) = BlockBuilder::new().build_on(&node.genesis);
        let parent = mine(&node, &remote, &mut sealed, parent).await;
        let parent_hash = node.chain.insert_block(&parent);

        let (child, _) = BlockBuilder::new().transfers(1).build_on(&parent.header);
        let child = mine(&node, &remote, &mut sealed, child).await;
        assert!(node.chain.prune_state(parent_hash));

        let err = node.validator.validate_body(&child).unwrap_err();
        assert_eq!(
            err,
            BlockValidationError::PrunedAncestor {
                parent: parent_hash,
                number: 2
            }
        );
        assert!(err.is_recoverable());
        assert_eq!(err.class(), ErrorClass::MissingDependency);
    }

    // =============================================================================
    // INTEGRATION TESTS: UNCLES
    // =============================================================================

    #[test]
    fn test_block_with_valid_uncle() {
        let node = TestNode::new(DIFFICULTY);
        let (canon, _) = BlockBuilder::new().tag(1).build_on(&node.genesis);
        let (sibling, _) = BlockBuilder::new().tag(2).build_on(&node.genesis);
        node.chain.insert_block(&canon);

        let (block, _) = BlockBuilder::new()
            .uncles(vec![sibling.header.clone()])
            .build_on(&canon.header);
        assert_eq!(node.validator.validate_body(&block), Ok(()));
    }

    #[test]
    fn test_duplicate_uncle_rejected_by_engine() {
        let node = TestNode::new(DIFFICULTY);
        let (canon, _) = BlockBuilder::new().tag(1).build_on(&node.genesis);
        let (sibling, _) = BlockBuilder::new().tag(2).build_on(&node.genesis);
        node.chain.insert_block(&canon);

        let (block, _) = BlockBuilder::new()
            .uncles(vec![sibling.header.clone(), sibling.header.clone()])
            .build_on(&canon.header);
        assert_eq!(
            node.validator.validate_body(&block),
            Err(BlockValidationError::Engine(EngineError::DuplicateUncle(
                sibling.hash()
            )))
        );
    }

    #[test]
    fn test_uncle_cannot_be_included_twice_along_a_chain() {
        let node = TestNode::new(DIFFICULTY);
        let (canon, _) = BlockBuilder::new().tag(1).build_on(&node.genesis);
        let (sibling, _) = BlockBuilder::new().tag(2).build_on(&node.genesis);
        node.chain.insert_block(&canon);

        let (nephew, _) = BlockBuilder::new()
            .uncles(vec![sibling.header.clone()])
            .build_on(&canon.header);
        assert_eq!(node.validator.validate_body(&nephew), Ok(()));
        node.chain.insert_block(&nephew);

        let (next, _) = BlockBuilder::new()
            .uncles(vec![sibling.header.clone()])
            .build_on(&nephew.header);
        assert_eq!(
            node.validator.validate_body(&next),
            Err(BlockValidationError::Engine(EngineError::DuplicateUncle(
                sibling.hash()
            )))
        );
    }

    // =============================================================================
    // INTEGRATION TESTS: FORK RULES AND GAS LIMIT
    // =============================================================================

    #[test]
    fn test_state_root_variant_switches_at_fork() {
        let config = ChainConfig {
            chain_id: 7,
            eip158_block: Some(2),
        };
        let node = TestNode::with_config(DIFFICULTY, config);
        let state = ForkedState {
            legacy: H256::repeat_byte(3),
            delete_empty: H256::repeat_byte(4),
        };

        // Block 1 predates the fork and commits to the legacy root.
        let (first, receipts) = BlockBuilder::new()
            .state_root(state.legacy)
            .build_on(&node.genesis);
        assert_eq!(
            node.validator.validate_state(&first, &state, &receipts, 0),
            Ok(())
        );
        let (early, receipts) = BlockBuilder::new()
            .tag(1)
            .state_root(state.delete_empty)
            .build_on(&node.genesis);
        assert_eq!(
            node.validator.validate_state(&early, &state, &receipts, 0),
            Err(BlockValidationError::StateRootMismatch {
                remote: state.delete_empty,
                local: state.legacy,
            })
        );

        // From block 2 on, empty accounts are deleted before the root is taken.
        node.chain.insert_block(&first);
        let (second, receipts) = BlockBuilder::new()
            .state_root(state.delete_empty)
            .build_on(&first.header);
        assert_eq!(
            node.validator.validate_state(&second, &state, &receipts, 0),
            Ok(())
        );
        let (stale, receipts) = BlockBuilder::new()
            .tag(1)
            .state_root(state.legacy)
            .build_on(&first.header);
        assert_eq!(
            node.validator.validate_state(&stale, &state, &receipts, 0),
            Err(BlockValidationError::StateRootMismatch {
                remote: state.legacy,
                local: state.delete_empty,
            })
        );
    }

    #[test]
    fn test_gas_limit_converges_into_bounds() {
        let calc = GasLimitCalculator::default();
        let bounds = GasBounds::new(8_000_000, 12_000_000);

        let mut limit = 4_712_388u64;
        let mut steps = 0;
        while limit < bounds.floor {
            let next = calc.calc_gas_limit(0, limit, bounds.floor, bounds.ceiling);
            assert!(next > limit);
            assert!(next - limit <= limit / calc.bound_divisor());
            limit = next;
            steps += 1;
        }
        assert_eq!(limit, bounds.floor);
        assert!(steps > 100);
    }
}
